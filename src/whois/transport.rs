//! Raw WHOIS transport over TCP port 43.
//!
//! The `RawWhois` trait is an injected capability so the check flow and the
//! owner parser can be tested without touching the network. The production
//! client picks a registry server by TLD (IANA as fallback) for domains and
//! ARIN for IP addresses, and enforces a response-size ceiling and a query
//! deadline.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::{Config, WHOIS_CONNECT_TIMEOUT_SECS, WHOIS_PORT};
use crate::error_handling::WhoisError;

/// Raw WHOIS query capability: target (domain or IP) in, response text out.
#[async_trait]
pub trait RawWhois: Send + Sync {
    /// Queries WHOIS for the given target and returns the raw response text.
    async fn query(&self, target: &str) -> Result<String, WhoisError>;
}

/// Production WHOIS client speaking the port-43 protocol directly.
#[derive(Clone)]
pub struct TcpWhoisClient {
    query_timeout: Duration,
    max_response_bytes: usize,
    /// Fixed `host:port` for tests; when unset the server is chosen per target.
    server_override: Option<String>,
}

impl TcpWhoisClient {
    /// Creates a client with an explicit deadline and response ceiling.
    pub fn new(query_timeout: Duration, max_response_bytes: usize) -> Self {
        Self {
            query_timeout,
            max_response_bytes,
            server_override: None,
        }
    }

    /// Creates a client from the service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_secs(config.whois_timeout_seconds),
            config.whois_max_response_bytes,
        )
    }

    /// Directs every query at a fixed `host:port` instead of the registry
    /// servers. Intended for tests against a local stub server.
    pub fn with_server(mut self, addr: impl Into<String>) -> Self {
        self.server_override = Some(addr.into());
        self
    }

    async fn query_server(&self, addr: &str, server: &str, target: &str) -> Result<String, WhoisError> {
        let mut stream = timeout(
            Duration::from_secs(WHOIS_CONNECT_TIMEOUT_SECS),
            TcpStream::connect(addr),
        )
        .await
        .map_err(|_| WhoisError::Timeout {
            server: server.to_string(),
        })?
        .map_err(|e| WhoisError::Connect {
            server: server.to_string(),
            message: e.to_string(),
        })?;

        stream
            .write_all(format!("{target}\r\n").as_bytes())
            .await
            .map_err(|e| WhoisError::Io {
                server: server.to_string(),
                message: e.to_string(),
            })?;

        // Bounded read: a misbehaving server must not grow the buffer past
        // the configured ceiling.
        let mut response: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.map_err(|e| WhoisError::Io {
                server: server.to_string(),
                message: e.to_string(),
            })?;
            if n == 0 {
                break;
            }
            if response.len() + n > self.max_response_bytes {
                return Err(WhoisError::ResponseTooLarge {
                    server: server.to_string(),
                    limit: self.max_response_bytes,
                });
            }
            response.extend_from_slice(&chunk[..n]);
        }

        let text = String::from_utf8_lossy(&response).into_owned();
        if text.trim().is_empty() {
            return Err(WhoisError::EmptyResponse {
                server: server.to_string(),
            });
        }
        Ok(text)
    }
}

/// Picks the WHOIS server for a target.
///
/// IP addresses go to ARIN (which refers onward to the other RIRs); domains
/// are routed by TLD with `whois.iana.org` as the catch-all.
fn server_for(target: &str) -> &'static str {
    if target.parse::<IpAddr>().is_ok() {
        return "whois.arin.net";
    }

    let tld = target.rsplit('.').next().unwrap_or_default();
    match tld.to_ascii_lowercase().as_str() {
        "com" | "net" => "whois.verisign-grs.com",
        "org" => "whois.pir.org",
        "io" => "whois.nic.io",
        "dev" => "whois.nic.dev",
        "co" => "whois.nic.co",
        "uk" => "whois.nic.uk",
        "de" => "whois.denic.de",
        "fr" => "whois.nic.fr",
        "nl" => "whois.domain-registry.nl",
        "ru" => "whois.tcinet.ru",
        "jp" => "whois.jprs.jp",
        "cn" => "whois.cnnic.cn",
        "au" => "whois.auda.org.au",
        _ => "whois.iana.org",
    }
}

#[async_trait]
impl RawWhois for TcpWhoisClient {
    async fn query(&self, target: &str) -> Result<String, WhoisError> {
        let (addr, server) = match &self.server_override {
            Some(addr) => (addr.clone(), addr.clone()),
            None => {
                let server = server_for(target);
                (format!("{server}:{WHOIS_PORT}"), server.to_string())
            }
        };

        log::debug!("WHOIS query for {target} via {server}");
        match timeout(self.query_timeout, self.query_server(&addr, &server, target)).await {
            Ok(result) => result,
            Err(_) => Err(WhoisError::Timeout { server }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Spawns a one-shot WHOIS stub that replies with `response` to any query.
    async fn spawn_stub_server(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 512];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response).await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_query_returns_server_response() {
        let addr = spawn_stub_server(b"OrgName: Example Org\nCountry: US\n").await;
        let client =
            TcpWhoisClient::new(Duration::from_secs(5), 64 * 1024).with_server(addr);

        let text = client.query("93.184.216.34").await.unwrap();
        assert!(text.contains("OrgName: Example Org"));
    }

    #[tokio::test]
    async fn test_oversized_response_is_a_transport_failure() {
        // Stub sends 8 KiB against a 1 KiB ceiling
        static BIG: [u8; 8192] = [b'x'; 8192];
        let addr = spawn_stub_server(&BIG).await;
        let client = TcpWhoisClient::new(Duration::from_secs(5), 1024).with_server(addr);

        match client.query("example.com").await {
            Err(WhoisError::ResponseTooLarge { limit, .. }) => assert_eq!(limit, 1024),
            other => panic!("expected ResponseTooLarge, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_response_is_a_transport_failure() {
        let addr = spawn_stub_server(b"  \r\n").await;
        let client =
            TcpWhoisClient::new(Duration::from_secs(5), 64 * 1024).with_server(addr);

        assert!(matches!(
            client.query("example.com").await,
            Err(WhoisError::EmptyResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_connect_failure() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let client =
            TcpWhoisClient::new(Duration::from_secs(5), 64 * 1024).with_server(addr);
        assert!(matches!(
            client.query("example.com").await,
            Err(WhoisError::Connect { .. })
        ));
    }

    #[test]
    fn test_server_selection_by_tld() {
        assert_eq!(server_for("example.com"), "whois.verisign-grs.com");
        assert_eq!(server_for("example.net"), "whois.verisign-grs.com");
        assert_eq!(server_for("example.org"), "whois.pir.org");
        assert_eq!(server_for("example.de"), "whois.denic.de");
        // Unknown TLDs fall through to IANA
        assert_eq!(server_for("example.museum"), "whois.iana.org");
    }

    #[test]
    fn test_server_selection_for_ip_targets() {
        assert_eq!(server_for("93.184.216.34"), "whois.arin.net");
        assert_eq!(server_for("2606:2800:220:1::1"), "whois.arin.net");
    }
}
