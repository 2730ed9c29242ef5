//! Bitmap images.
use std::sync::Arc;

use crate::{
    backend,
    geometry::Size,
    iface::{self, Backend as _, Bitmap as _, PixelFormat},
};

/// An immutable bitmap image.
///
/// Cheap to clone; the pixel data is shared.
#[derive(Debug, Clone)]
pub struct Bitmap {
    handler: Arc<dyn iface::Bitmap>,
}

impl Bitmap {
    /// Create a bitmap with the given dimensions and pixel format.
    pub fn new(size: Size, format: PixelFormat) -> Bitmap {
        Bitmap {
            handler: backend::backend().new_bitmap(size, format),
        }
    }

    pub(crate) fn from_handler(handler: Arc<dyn iface::Bitmap>) -> Bitmap {
        Bitmap { handler }
    }

    pub(crate) fn handler(&self) -> &Arc<dyn iface::Bitmap> {
        &self.handler
    }

    pub fn size(&self) -> Size {
        self.handler.size()
    }

    /// The pixel format the bitmap was created with.
    pub fn pixel_format(&self) -> PixelFormat {
        self.handler.pixel_format()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size().width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size().height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmaps_report_their_creation_parameters() {
        let bitmap = Bitmap::new(Size::new(16, 9), PixelFormat::Rgb32);
        assert_eq!(bitmap.size(), Size::new(16, 9));
        assert_eq!(bitmap.width(), 16);
        assert_eq!(bitmap.height(), 9);
        assert_eq!(bitmap.pixel_format(), PixelFormat::Rgb32);
    }

    #[test]
    fn clones_share_the_pixel_data() {
        let bitmap = Bitmap::new(Size::new(2, 2), PixelFormat::Rgba32);
        let clone = bitmap.clone();
        assert!(Arc::ptr_eq(bitmap.handler(), clone.handler()));
    }

    #[test]
    fn backends_can_recover_their_concrete_bitmap() {
        let bitmap = Bitmap::new(Size::new(2, 2), PixelFormat::Rgba32);
        let concrete = bitmap
            .handler()
            .as_any()
            .downcast_ref::<crate::headless::Bitmap>()
            .unwrap();
        assert_eq!(concrete.data().len(), 16);
    }
}
