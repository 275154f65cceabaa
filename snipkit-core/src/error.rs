use chrono::NaiveDateTime;
use snipkit_model::{FieldName, ImageDimensionsError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipkitError {
    #[error(
        "Field `{field}` mixes dates ({instant}) with unparsed text ({text:?})"
    )]
    MixedDateKeys {
        field: FieldName,
        instant: NaiveDateTime,
        text: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Degenerate image: {0}")]
    DegenerateImage(#[from] ImageDimensionsError),
}

pub type Result<T> = std::result::Result<T, SnipkitError>;
