use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextBitmapError {
    #[error("invalid parameter `{name}`: {value}")]
    /// A numeric parameter was outside of its valid range (e.g. a negative maximum width)
    InvalidParameter { name: &'static str, value: i64 },

    #[error("no font registered for family `{family}`")]
    /// The requested font family could not be resolved to a loaded font
    FontResolution { family: String },

    #[error(transparent)]
    /// An I/O error occurred while reading a font file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
