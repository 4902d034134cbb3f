use thiserror::Error;

#[derive(Error, Debug)]
pub enum NibbleveilError {
    /// Represents an unsupported media format. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a secret image that does not fit into the base image
    #[error(
        "Dimension error: the secret image ({2}x{3}) must not exceed the base image ({0}x{1}) in either dimension"
    )]
    SecretTooLarge(u32, u32, u32, u32),

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No base image set")]
    BaseImageNotSet,

    #[error("No secret image set")]
    SecretImageNotSet,

    #[error("No merged image set")]
    MergedImageNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
