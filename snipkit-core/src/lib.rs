//! # snipkit core
//!
//! Small, independent utilities for reuse across unrelated projects.
//!
//! ## Overview
//!
//! - **Keyed sorting**: order records by one named field, either as
//!   case-insensitive text or chronologically (see [`sorting`])
//! - **Text casing**: capitalize words or sentences and collect initials
//! - **Media**: aspect ratio of an image embedded in a `data:` URL
//! - **Debounce**: trailing-edge debounce for callbacks on a Tokio runtime
//! - **Configuration**: TOML-backed defaults for the above
//!
//! None of the utilities depends on another.
//!
//! ## Examples
//!
//! ```
//! use std::collections::HashMap;
//! use snipkit_core::sorting::sort_by_date_key;
//! use snipkit_model::{FieldValue, SortOrder};
//!
//! let record = |date: &str| {
//!     HashMap::from([("date".to_string(), FieldValue::from(date))])
//! };
//! let sorted = sort_by_date_key(
//!     vec![record("01/02/2020"), record("15/01/2020")],
//!     "date",
//!     SortOrder::Ascending,
//! );
//! assert_eq!(sorted[0]["date"], FieldValue::from("15/01/2020"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// TOML-backed configuration
pub mod config;
/// Trailing-edge debounce
pub mod debounce;
pub mod error;
/// Aspect ratios of `data:` URL images
pub mod media;
/// Keyed record sorting
pub mod sorting;
/// String capitalization helpers
pub mod text;

pub use config::{DebounceConfig, SnipkitConfig, SortingConfig};
pub use debounce::Debouncer;
pub use error::{Result, SnipkitError};
pub use media::{AspectRatio, aspect_ratio_from_data_url, aspect_ratio_label};
pub use sorting::{
    MixedKeyPolicy, compare_by_date_key, compare_by_text_key,
    sort_by_date_key, sort_by_date_key_in_place, sort_by_text_key,
    sort_by_text_key_in_place, try_sort_by_date_key,
};
pub use text::{capitalize_sentence, capitalize_words, initials};
