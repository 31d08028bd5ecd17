pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The archive index could not be reached or answered with data we could
    /// not interpret. The affected node stays unfetched so the call can be
    /// retried.
    IndexUnavailable(String),
    /// A node id that does not belong to the store it was used with.
    DetachedNode,
    InvalidFormat(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::IndexUnavailable(ref msg) => write!(f, "Archive index unavailable: {msg}"),
            Error::DetachedNode => write!(f, "Node is not attached to this store"),
            Error::InvalidFormat(ref msg) => write!(f, "Invalid format: {msg}"),
            Error::IoError(ref err) => write!(f, "{err}"),
            Error::JsonError(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            Error::JsonError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::JsonError(error)
    }
}
