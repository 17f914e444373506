//! HTTP request handlers.

mod check;
mod status;

pub use check::check_handler;
pub use status::status_handler;
