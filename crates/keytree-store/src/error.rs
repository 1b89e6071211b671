use std::fmt;

/// Result type for keytree-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// The store address could not be parsed
    Config(String),

    /// No connection could be established
    Connection {
        address: String,
        source: redis::RedisError,
    },

    /// A command failed
    Redis(redis::RedisError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Connection { address, source } => {
                write!(f, "Unable to connect to {}: {}", address, source)
            }
            Error::Redis(err) => write!(f, "Redis error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => Some(source),
            Error::Redis(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<redis::RedisError> for Error {
    fn from(err: redis::RedisError) -> Self {
        Error::Redis(err)
    }
}

impl From<Error> for keytree_types::Error {
    fn from(err: Error) -> Self {
        keytree_types::Error::Store(err.to_string())
    }
}
