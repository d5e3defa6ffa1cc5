//! Error types for kvlog

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Emit attempted on a logger with no bound configuration
    #[error("logger '{name}' is not bound to a configuration")]
    Unbound { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink error (generic)
    #[error("sink error: {0}")]
    Sink(String),
}

impl LogError {
    /// Create an unbound-logger error
    pub fn unbound(name: impl Into<String>) -> Self {
        LogError::Unbound { name: name.into() }
    }

    /// Create an IO error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LogError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create a sink error (generic)
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LogError::Sink(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::unbound("app");
        assert!(matches!(err, LogError::Unbound { .. }));

        let err = LogError::sink("stream closed");
        assert!(matches!(err, LogError::Sink(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::unbound("svc.sub");
        assert_eq!(
            err.to_string(),
            "logger 'svc.sub' is not bound to a configuration"
        );

        let err = LogError::sink("stream closed");
        assert_eq!(err.to_string(), "sink error: stream closed");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LogError::io_operation("opening log file", io_err);

        assert!(matches!(err, LogError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
