//! Core data model definitions shared across snipkit crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod field;
pub mod image;
pub mod order;
pub mod prelude;
pub mod record;

pub use error::ImageDimensionsError;
pub use field::{FieldName, FieldValue, UNDEFINED_TEXT, text_form_of};
pub use image::ImageDimensions;
pub use order::SortOrder;
pub use record::Record;
