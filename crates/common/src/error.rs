//! Error variants.
use std::{error, fmt, result};

use log::SetLoggerError;

/// Result type with [`Error`] variants.
///
/// [`Error`]: ./enum.Error.html
pub type Result<T> = result::Result<T, Error>;

/// Error variants used in the blockgen crates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Generic CLI error.
    CLIError(String),
    /// Indicates an invalid argument is provided.
    InvalidArgument(String),
    /// File I/O error.
    FileIOError(String),
    /// Parsing error.
    ParsingError(String),
    /// A generation request was rejected.
    RequestError(String),
}

impl fmt::Display for Error {
    /// Display the error variants.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CLIError(ref msg) => write!(f, "CLI Error: {}", msg),
            Error::InvalidArgument(ref msg) => write!(f, "Invalid argument: {}", msg),
            Error::FileIOError(ref msg) => write!(f, "File I/O error: {}", msg),
            Error::ParsingError(ref msg) => write!(f, "Parsing error: {}", msg),
            Error::RequestError(ref msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::FileIOError(e.to_string())
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Error::CLIError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error() {
        let a = Error::InvalidArgument("test".to_string());
        let b = Error::RequestError("missing parameter `width`".to_string());
        assert_eq!(a.to_string(), "Invalid argument: test");
        assert_eq!(b.to_string(), "Request error: missing parameter `width`");
    }

    #[test]
    fn io_error() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(err, Error::FileIOError("no such file".to_string()));
    }
}
