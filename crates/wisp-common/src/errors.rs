use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WispError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");
    }

    #[test]
    fn config_error_converts_to_wisp_error() {
        let err: WispError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, WispError::Config(_)));
        assert_eq!(err.to_string(), "config parse error: bad toml");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WispError = io.into();
        assert!(matches!(err, WispError::Io(_)));
    }

    #[test]
    fn backend_error_display() {
        let err = WispError::Backend("connection refused".into());
        assert_eq!(err.to_string(), "backend error: connection refused");
    }
}
