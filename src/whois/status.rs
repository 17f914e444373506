//! Domain status extraction from WHOIS text.

/// Field names carrying domain status codes across registrar formats.
const STATUS_FIELDS: &[&str] = &["domain status", "status", "state"];

/// Extracts the ordered, de-duplicated list of domain status codes.
///
/// Registry output repeats `Domain Status:` once per EPP code, usually with a
/// trailing ICANN URL; only the leading token of each value is kept.
pub fn extract_domain_status(raw: &str) -> Vec<String> {
    let mut statuses: Vec<String> = Vec::new();

    for line in raw.lines() {
        let Some((field, value)) = line.trim().split_once(':') else {
            continue;
        };
        if !STATUS_FIELDS.contains(&field.trim().to_ascii_lowercase().as_str()) {
            continue;
        }

        let value = value.trim();
        let code = value.split_whitespace().next().unwrap_or(value);
        if !code.is_empty() && !statuses.iter().any(|s| s == code) {
            statuses.push(code.to_string());
        }
    }

    statuses
}
