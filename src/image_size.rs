//! Image size resolution for inline Markdown images.
//!
//! An image can carry an author-declared size (`![alt](url =200x100)`), a size
//! observed earlier from the image metadata, both, or neither. The rules below
//! are applied in strict priority order:
//!
//! 1. A declared width *and* height are used verbatim.
//! 2. With complete metadata, the aspect ratio is taken from it.
//! 3. A declared width or height alone is completed through that ratio.
//! 4. Without a ratio, a single declared dimension yields a square.
//! 5. Complete metadata alone is used verbatim.
//! 6. Otherwise the image is a square as wide as the layout.
//!
//! Reordering these steps changes the outcome for images with partial
//! metadata, such as SVGs that have no intrinsic size.

use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// Author-declared size. Either side may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Size previously observed from image metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Concrete size to render an image at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

impl SourceSize {
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }
}

impl KnownSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    fn both(&self) -> Option<(f64, f64)> {
        Some((set(self.width)?, set(self.height)?))
    }
}

/// A dimension counts only when present, non-zero and a number.
fn set(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Resolve the size to render an image at.
///
/// `default_width` is used for the fallback square when `layout_width` is not set.
pub fn resolve_image_size(
    source: Option<&SourceSize>,
    known: Option<&KnownSize>,
    layout_width: Option<f64>,
    default_width: f64,
) -> ImageSize {
    let source_width = source.and_then(|s| set(s.width));
    let source_height = source.and_then(|s| set(s.height));
    let known = known.and_then(KnownSize::both);

    if let (Some(width), Some(height)) = (source_width, source_height) {
        return ImageSize::new(width, height);
    }

    // A ratio that is NaN or underflows to zero is no ratio at all
    let height_over_width = known.and_then(|(kw, kh)| set(Some(if kw > 0.0 { kh / kw } else { 1.0 })));
    let width_over_height = known.and_then(|(kw, kh)| set(Some(if kh > 0.0 { kw / kh } else { 1.0 })));

    match (source_width, source_height) {
        (Some(width), None) => {
            if let Some(ratio) = height_over_width {
                return ImageSize::new(width, width * ratio);
            }
        }
        (None, Some(height)) => {
            if let Some(ratio) = width_over_height {
                return ImageSize::new(height * ratio, height);
            }
        }
        _ => {}
    }

    // Declared but no metadata to derive the other side from (typically SVG)
    if let Some(side) = source_width.or(source_height) {
        return ImageSize::square(side);
    }

    if let Some((width, height)) = known {
        return ImageSize::new(width, height);
    }

    ImageSize::square(set(layout_width).unwrap_or(default_width))
}

/// Image size resolution with the fallback width taken from the window.
///
/// Without a viewport the fallback square uses `default_width` for every post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSizer {
    viewport: Option<Viewport>,
    default_width: f64,
}

impl ImageSizer {
    pub fn new(viewport: Option<Viewport>, default_width: f64) -> Self {
        Self {
            viewport,
            default_width,
        }
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Width of the fallback square for a post of this kind.
    pub fn fallback_width(&self, is_reply: bool, is_tablet: bool) -> f64 {
        match &self.viewport {
            Some(viewport) => viewport.width(is_reply, is_tablet),
            None => self.default_width,
        }
    }

    /// Resolve a size, falling back to the viewport width for this kind of post.
    pub fn resolve(
        &self,
        is_reply: bool,
        is_tablet: bool,
        source: Option<&SourceSize>,
        known: Option<&KnownSize>,
        layout_width: Option<f64>,
    ) -> ImageSize {
        resolve_image_size(source, known, layout_width, self.fallback_width(is_reply, is_tablet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: f64 = 320.0;

    #[test]
    fn test_explicit_size_wins() {
        let source = SourceSize::new(Some(100.0), Some(50.0));
        let known = KnownSize::new(400.0, 400.0);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&known), Some(999.0), DEFAULT),
            ImageSize::new(100.0, 50.0)
        );
        assert_eq!(
            resolve_image_size(Some(&source), None, None, DEFAULT),
            ImageSize::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_width_derived_from_ratio() {
        let source = SourceSize::new(Some(100.0), None);
        let known = KnownSize::new(200.0, 100.0);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&known), None, DEFAULT),
            ImageSize::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_height_derived_from_ratio() {
        let source = SourceSize::new(None, Some(30.0));
        let known = KnownSize::new(200.0, 100.0);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&known), None, DEFAULT),
            ImageSize::new(60.0, 30.0)
        );
    }

    #[test]
    fn test_single_dimension_without_metadata_is_square() {
        let width_only = SourceSize::new(Some(50.0), None);
        assert_eq!(
            resolve_image_size(Some(&width_only), None, None, DEFAULT),
            ImageSize::square(50.0)
        );

        let height_only = SourceSize::new(None, Some(75.0));
        assert_eq!(
            resolve_image_size(Some(&height_only), None, Some(500.0), DEFAULT),
            ImageSize::square(75.0)
        );
    }

    #[test]
    fn test_partial_metadata_gives_no_ratio() {
        let source = SourceSize::new(Some(80.0), None);
        let known = KnownSize {
            width: Some(200.0),
            height: None,
        };
        assert_eq!(
            resolve_image_size(Some(&source), Some(&known), None, DEFAULT),
            ImageSize::square(80.0)
        );
    }

    #[test]
    fn test_known_size_verbatim() {
        let known = KnownSize::new(640.0, 480.0);
        assert_eq!(
            resolve_image_size(None, Some(&known), Some(300.0), DEFAULT),
            ImageSize::new(640.0, 480.0)
        );
        assert_eq!(
            resolve_image_size(Some(&SourceSize::default()), Some(&known), None, DEFAULT),
            ImageSize::new(640.0, 480.0)
        );
    }

    #[test]
    fn test_fallback_square() {
        assert_eq!(resolve_image_size(None, None, Some(300.0), DEFAULT), ImageSize::square(300.0));
        assert_eq!(resolve_image_size(None, None, None, DEFAULT), ImageSize::square(DEFAULT));
        // A zero layout width is treated as unset
        assert_eq!(resolve_image_size(None, None, Some(0.0), DEFAULT), ImageSize::square(DEFAULT));
    }

    #[test]
    fn test_zero_dimensions_count_as_unset() {
        let source = SourceSize::new(Some(0.0), Some(40.0));
        assert_eq!(
            resolve_image_size(Some(&source), None, None, DEFAULT),
            ImageSize::square(40.0)
        );

        let known = KnownSize::new(0.0, 100.0);
        assert_eq!(
            resolve_image_size(None, Some(&known), None, DEFAULT),
            ImageSize::square(DEFAULT)
        );
    }

    #[test]
    fn test_negative_metadata_ratio_defaults_to_one() {
        let source = SourceSize::new(Some(90.0), None);
        let known = KnownSize::new(-10.0, 20.0);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&known), None, DEFAULT),
            ImageSize::new(90.0, 90.0)
        );
    }

    #[test]
    fn test_degenerate_ratio_falls_back_to_square() {
        let source = SourceSize::new(Some(100.0), None);

        // inf / inf is NaN
        let infinite = KnownSize::new(f64::INFINITY, f64::INFINITY);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&infinite), None, DEFAULT),
            ImageSize::square(100.0)
        );

        // tiny / huge underflows to zero
        let underflow = KnownSize::new(f64::MAX, f64::MIN_POSITIVE);
        assert_eq!(
            resolve_image_size(Some(&source), Some(&underflow), None, DEFAULT),
            ImageSize::square(100.0)
        );

        // The other direction still has a usable ratio
        let height_only = SourceSize::new(None, Some(10.0));
        let wide = KnownSize::new(f64::MAX, 1.0e300);
        let size = resolve_image_size(Some(&height_only), Some(&wide), None, DEFAULT);
        assert_eq!(size.height, 10.0);
        assert!(size.width > 10.0);
    }

    #[test]
    fn test_sizer_uses_viewport_width() {
        let sizer = ImageSizer::new(Some(Viewport::new(390.0, 844.0)), DEFAULT);
        assert_eq!(sizer.resolve(false, false, None, None, None), ImageSize::square(320.0));
        assert_eq!(sizer.resolve(true, false, None, None, None), ImageSize::square(309.0));
        assert_eq!(
            sizer.resolve(true, false, None, None, Some(200.0)),
            ImageSize::square(200.0)
        );
    }

    #[test]
    fn test_sizer_without_viewport_uses_default_width() {
        let sizer = ImageSizer::new(None, 250.0);
        assert!(sizer.viewport().is_none());
        assert_eq!(sizer.fallback_width(true, true), 250.0);
        assert_eq!(sizer.resolve(true, true, None, None, None), ImageSize::square(250.0));
    }
}
