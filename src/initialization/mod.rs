//! Process initialization: logger and HTTP client setup.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
