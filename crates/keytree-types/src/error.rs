use std::fmt;

/// Result type for keytree-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to a key store
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// The store rejected or failed a command
    Store(String),

    /// The store answered with a reply of an unexpected shape
    UnexpectedReply(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Store(msg) => write!(f, "Store error: {}", msg),
            Error::UnexpectedReply(msg) => write!(f, "Unexpected reply: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Store(_) | Error::UnexpectedReply(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
