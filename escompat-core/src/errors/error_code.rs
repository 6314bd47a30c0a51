//! ErrorCode trait for embedding consumers.

/// Structured error code string for consumers embedding the engine
/// (exit-code mapping and console formatting happen upstream).
pub trait ErrorCode {
    /// Returns the stable code string (e.g. "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const RESOLVER_ERROR: &str = "RESOLVER_ERROR";
pub const CACHE_READ_ERROR: &str = "CACHE_READ_ERROR";
