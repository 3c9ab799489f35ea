use core::fmt;

/// Result with internal [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An error occurred while attempting to produce a black copy of an image.
    BlackCopy(String),
    /// An error occurred while attempting to decode a message from an image.
    Decoding(String),
    /// An error occurred while attempting to encode a message into an image.
    Encoding(String),
    /// An error occurred while attempting to inspect an image.
    Inspection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BlackCopy(s) => s,
            Error::Decoding(s) => s,
            Error::Encoding(s) => s,
            Error::Inspection(s) => s,
        })
    }
}

impl std::error::Error for Error {}
