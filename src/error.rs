pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create report output error
///
/// Raised when the report file cannot be created or appended to. Fatal for
/// the whole run.
pub fn output_create_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!(
        "Failed to create output file '{}': {}",
        path, source
    ))
}

/// Create report write error
///
/// Raised when appending to or flushing an already created report fails.
pub fn output_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!(
        "Failed to write output file '{}': {}",
        path, source
    ))
}

/// Create discovery error for an unusable root folder
pub fn discovery_error(path: &str, message: impl Into<String>) -> AppError {
    AppError::bad_request(format!(
        "Cannot scan folder '{}': {}",
        path,
        message.into()
    ))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create error for a failed interactive prompt
pub fn prompt_error(source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read answer from console: {}", source))
}
