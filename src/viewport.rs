//! Layout width available to inline images.

use serde::Serialize;

/// Horizontal space consumed by avatar and margins around a post body
pub const DEFAULT_IMAGE_OFFSET: f64 = 70.0;

/// Extra indentation of posts shown inside a reply thread
pub const DEFAULT_REPLY_OFFSET: f64 = 11.0;

/// Width of the channel sidebar that stays visible on tablets
pub const DEFAULT_TABLET_SIDEBAR_WIDTH: f64 = 320.0;

/// Window geometry used to compute the default image width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub window_width: f64,
    pub window_height: f64,
    pub image_offset: f64,
    pub reply_offset: f64,
    pub tablet_sidebar_width: f64,
}

impl Viewport {
    pub fn new(window_width: f64, window_height: f64) -> Self {
        Self {
            window_width,
            window_height,
            image_offset: DEFAULT_IMAGE_OFFSET,
            reply_offset: DEFAULT_REPLY_OFFSET,
            tablet_sidebar_width: DEFAULT_TABLET_SIDEBAR_WIDTH,
        }
    }

    /// Width available to an image in a post.
    ///
    /// Based on the portrait width (the shorter window side) so the size
    /// stays stable across rotations. Never negative.
    pub fn width(&self, is_reply: bool, is_tablet: bool) -> f64 {
        let mut width = self.window_width.min(self.window_height) - self.image_offset;
        if is_tablet {
            width -= self.tablet_sidebar_width;
        }
        if is_reply {
            width -= self.reply_offset;
        }
        width.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_phone() {
        let vp = Viewport::new(390.0, 844.0);
        assert_eq!(vp.width(false, false), 320.0);
        assert_eq!(vp.width(true, false), 309.0);
    }

    #[test]
    fn test_landscape_uses_short_side() {
        let vp = Viewport::new(844.0, 390.0);
        assert_eq!(vp.width(false, false), 320.0);
    }

    #[test]
    fn test_tablet_offsets() {
        let vp = Viewport::new(1024.0, 1366.0);
        assert_eq!(vp.width(false, true), 634.0);
        assert_eq!(vp.width(true, true), 623.0);
    }

    #[test]
    fn test_never_negative() {
        let vp = Viewport::new(50.0, 50.0);
        assert_eq!(vp.width(true, true), 0.0);
    }
}
