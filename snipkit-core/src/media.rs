//! Image aspect ratios from `data:` URLs.

use std::fmt;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageReader;
use snipkit_model::ImageDimensions;
use tracing::debug;

use crate::error::{Result, SnipkitError};

/// Width divided by height of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    pub fn value(self) -> f64 {
        self.0
    }

    /// One decimal place of the exact stored value, exact halves rounded
    /// up (`5:4` renders as `1.3`, `23:20` as `1.1`).
    pub fn to_fixed_1(self) -> String {
        let value = self.0;
        // Exact ties at one decimal are odd multiples of 0.05 that a double
        // can hold, i.e. odd multiples of 0.25. `* 4.0` is exact.
        let quarters = value * 4.0;
        if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
            format!("{:.1}", (value * 10.0).ceil() / 10.0)
        } else {
            format!("{value:.1}")
        }
    }
}

impl From<ImageDimensions> for AspectRatio {
    fn from(dimensions: ImageDimensions) -> Self {
        AspectRatio(dimensions.aspect_ratio())
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed_1())
    }
}

/// Read the dimensions of a base64 `data:` URL image and return its ratio.
///
/// Only the image header is parsed; pixels are never decoded.
pub fn aspect_ratio_from_data_url(url: &str) -> Result<AspectRatio> {
    let bytes = decode_data_url(url)?;
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    debug!(width, height, "read image dimensions from data URL");

    let dimensions = ImageDimensions::try_from((width, height))?;
    Ok(AspectRatio::from(dimensions))
}

/// The ratio rendered with one decimal, or `None` when it cannot be
/// computed for any reason.
pub fn aspect_ratio_label(url: &str) -> Option<String> {
    aspect_ratio_from_data_url(url)
        .map(AspectRatio::to_fixed_1)
        .ok()
}

fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .get(..5)
        .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
        .map(|_| &url[5..])
        .ok_or_else(|| {
            SnipkitError::InvalidDataUrl("missing `data:` scheme".into())
        })?;

    let (meta, payload) = rest.split_once(',').ok_or_else(|| {
        SnipkitError::InvalidDataUrl("missing `,` before payload".into())
    })?;

    let is_base64 = meta
        .rsplit(';')
        .next()
        .is_some_and(|param| param.eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Err(SnipkitError::InvalidDataUrl(
            "only base64 payloads are supported".into(),
        ));
    }

    Ok(STANDARD.decode(payload.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(AspectRatio(1.25).to_fixed_1(), "1.3");
        assert_eq!(AspectRatio(0.75).to_fixed_1(), "0.8");
        assert_eq!(AspectRatio(16.0 / 9.0).to_fixed_1(), "1.8");
        assert_eq!(AspectRatio(1.0).to_string(), "1.0");
    }

    #[test]
    fn rounds_stored_value_not_scaled_value() {
        // 1.15 and 1.45 are stored just below the tie.
        assert_eq!(AspectRatio(23.0 / 20.0).to_fixed_1(), "1.1");
        assert_eq!(AspectRatio(29.0 / 20.0).to_fixed_1(), "1.4");
        assert_eq!(AspectRatio(0.5).to_fixed_1(), "0.5");
    }

    #[test]
    fn rejects_malformed_urls() {
        for url in [
            "http://example.com/a.png",
            "data:image/png;base64",
            "data:image/png,plain",
            "dat",
        ] {
            assert!(
                matches!(
                    decode_data_url(url),
                    Err(SnipkitError::InvalidDataUrl(_))
                ),
                "{url}"
            );
        }
    }

    #[test]
    fn decodes_base64_payload() {
        let bytes = decode_data_url("DATA:text/plain;BASE64,aGk=").unwrap();
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn bad_base64_is_reported() {
        assert!(matches!(
            decode_data_url("data:image/png;base64,!!!"),
            Err(SnipkitError::Base64(_))
        ));
    }
}
