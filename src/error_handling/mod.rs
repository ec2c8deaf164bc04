//! Error types and error handling.

mod types;

pub use types::{
    CaptchaError, EnrichError, ErrorCode, GeoError, InitializationError, RegistryError,
};
