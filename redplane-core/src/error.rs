use core::fmt;

/// Result with internal [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The decoded image does not use a multi-channel colour layout.
    ChannelLayoutUnsupported,
    /// The message plane is larger than the carrier in at least one axis.
    DimensionMismatch,
    /// A pixel buffer must have non-zero width and height.
    ImageDimensionsInvalid,
    /// The file extension does not indicate a supported lossless image format.
    ImageFormatUnsupported,
    /// There was an error when attempting to load an image file.
    ImageOpening,
    /// There was an error when attempting to save an image file.
    ImageSaving(String),
    /// The requested decode rendering mode is not recognized.
    ModeInvalid,
    /// The specified path is invalid.
    PathInvalid,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ChannelLayoutUnsupported => {
                "The image is not a multi-channel (RGB or RGBA) image."
            }
            Error::DimensionMismatch => {
                "The message image is larger than the carrier image in at least one axis."
            }
            Error::ImageDimensionsInvalid => {
                "Invalid image dimensions: the width and height must both be greater than zero."
            }
            Error::ImageFormatUnsupported => {
                "The file extension does not indicate a supported lossless image format."
            }
            Error::ImageOpening => "Error when attempting to load the image.",
            Error::ImageSaving(s) => s,
            Error::ModeInvalid => "The decode mode is invalid.",
            Error::PathInvalid => "The path is invalid or does not exist.",
        })
    }
}

impl std::error::Error for Error {}
