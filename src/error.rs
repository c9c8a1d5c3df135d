use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Chat service error: {0}")]
    Client(#[from] crate::client::ClientError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Config("missing endpoint".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing endpoint");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_client() {
        let client_err = crate::client::ClientError::EmptyReply;
        let app_err: AppError = client_err.into();
        assert!(matches!(app_err, AppError::Client(_)));
    }
}
