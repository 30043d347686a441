//! Application initialization.
//!
//! Functions to set up the logger and the shared HTTP client.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
