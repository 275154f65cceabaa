//! Keyed record sorting
//!
//! This module provides:
//! - Core traits for key resolution and comparison
//! - Typed text and date keys
//! - The ordered list of textual date encodings
//! - A field sort strategy plus plain function entry points

pub mod date_rules;
pub mod fields;
pub mod keys;
pub mod resolve;
pub mod simple;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use date_rules::{DateRule, date_rules, epoch, parse_date_text};
pub use fields::*;
pub use keys::*;
pub use resolve::*;
pub use simple::*;
pub use strategy::*;
pub use traits::*;
