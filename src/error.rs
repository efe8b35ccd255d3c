use thiserror::Error;

/// Main error type for valuegraph
#[derive(Error, Debug)]
pub enum ValueGraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document could not be decoded into a key/value mapping
    #[error("Parse error: {0}")]
    Parse(String),

    /// Graph could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Template could not be read or rendered
    #[error("Template error: {0}")]
    Template(String),

    /// Artifact could not be written
    #[error("Output error: {0}")]
    Output(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using ValueGraphError
pub type Result<T> = std::result::Result<T, ValueGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValueGraphError::Parse("root is not a mapping".to_string());
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("root is not a mapping"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ValueGraphError = json_err.into();
        assert!(matches!(err, ValueGraphError::Serialize(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ValueGraphError = io_err.into();
        assert!(matches!(err, ValueGraphError::Io(_)));
    }
}
