//! Bitmaps for the headless backend.
use std::{any::Any, fmt};

use super::super::{
    geometry::Size,
    iface::{self, PixelFormat},
};

/// A plain in-memory pixel buffer.
///
/// Rows are stored top to bottom with no padding between them. The
/// buffer is zero-filled at creation. The concrete type can be recovered
/// from a `dyn` handle through [`iface::Bitmap::as_any`].
pub struct Bitmap {
    size: Size,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Bitmap {
    pub(super) fn new(size: Size, format: PixelFormat) -> Self {
        let len = size.width.max(0) as usize
            * size.height.max(0) as usize
            * (format.bits_per_pixel() / 8) as usize;
        Self {
            size,
            format,
            data: vec![0; len],
        }
    }

    /// The raw pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("size", &self.size)
            .field("format", &self.format)
            .finish()
    }
}

impl iface::Bitmap for Bitmap {
    fn size(&self) -> Size {
        self.size
    }

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_follows_the_format() {
        assert_eq!(
            Bitmap::new(Size::new(4, 3), PixelFormat::Rgb24).data().len(),
            36
        );
        assert_eq!(
            Bitmap::new(Size::new(4, 3), PixelFormat::Rgba32).data().len(),
            48
        );
    }

    #[test]
    fn degenerate_sizes_make_an_empty_buffer() {
        assert!(Bitmap::new(Size::new(0, 5), PixelFormat::Rgba32)
            .data()
            .is_empty());
        assert!(Bitmap::new(Size::new(-1, 5), PixelFormat::Rgba32)
            .data()
            .is_empty());
    }
}
