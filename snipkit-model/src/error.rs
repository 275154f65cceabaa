use std::fmt::{self, Display};

/// Errors produced when validating decoded image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDimensionsError {
    ZeroWidth,
    ZeroHeight,
}

impl Display for ImageDimensionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageDimensionsError::ZeroWidth => write!(f, "image width is zero"),
            ImageDimensionsError::ZeroHeight => {
                write!(f, "image height is zero")
            }
        }
    }
}

impl std::error::Error for ImageDimensionsError {}
