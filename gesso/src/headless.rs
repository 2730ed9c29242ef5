//! The headless backend.
//!
//! This backend implements the whole backend interface without talking
//! to any windowing or text system. Fonts come from an in-memory
//! registry, bitmaps are plain pixel buffers, and brushes and regions
//! simply store their parameters. It backs this crate's test suite and
//! lets drawing-model code run where no display is available. It is also
//! the fallback installed when the first drawing operation happens with
//! no backend selected.
use std::sync::Arc;

use crate::{
    color::Color,
    geometry::{PointF, Size, SizeF},
    iface,
};

mod bitmap;
mod draw;
mod text;

pub use self::bitmap::Bitmap;
pub use self::draw::{LinearGradientBrush, RadialGradientBrush, Region, SolidBrush, TextureBrush};
pub use self::text::{Font, FontFamily, FontTypeface};

#[derive(Debug)]
pub struct HeadlessBackend {
    registry: text::FontRegistry,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            registry: text::FontRegistry::with_builtin_families(),
        }
    }

    /// Add a font family with the given typeface names, replacing an
    /// existing family with the same name.
    ///
    /// Registration requires exclusive access, so it has to happen before
    /// the backend is installed with [`crate::set_backend`].
    pub fn register_family(&mut self, name: &str, typefaces: &[&str]) {
        self.registry.register(name, typefaces);
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl iface::Backend for HeadlessBackend {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn default_family_name(&self) -> String {
        text::DEFAULT_FAMILY.to_owned()
    }

    fn default_font_size(&self) -> f32 {
        text::DEFAULT_SIZE
    }

    fn families(&self) -> Vec<Arc<dyn iface::FontFamily>> {
        self.registry.families()
    }

    fn find_family(&self, name: &str) -> Option<Arc<dyn iface::FontFamily>> {
        self.registry.find(name)
    }

    fn resolve_family(&self, name: &str) -> Arc<dyn iface::FontFamily> {
        self.registry.resolve(name)
    }

    fn system_font(
        &self,
        which: iface::SystemFont,
        size: Option<f32>,
        decoration: iface::FontDecoration,
    ) -> Arc<dyn iface::Font> {
        text::system_font(which, size, decoration)
    }

    fn new_bitmap(&self, size: Size, format: iface::PixelFormat) -> Arc<dyn iface::Bitmap> {
        Arc::new(Bitmap::new(size, format))
    }

    fn new_region(&self) -> Box<dyn iface::Region> {
        Box::new(Region::new())
    }

    fn new_solid_brush(&self, color: Color) -> Box<dyn iface::SolidBrush> {
        Box::new(SolidBrush::new(color))
    }

    fn new_linear_gradient_brush(
        &self,
        start: PointF,
        end: PointF,
        stops: &[iface::GradientStop],
    ) -> Box<dyn iface::LinearGradientBrush> {
        Box::new(LinearGradientBrush::new(start, end, stops))
    }

    fn new_radial_gradient_brush(
        &self,
        center: PointF,
        gradient_origin: PointF,
        radius: SizeF,
        stops: &[iface::GradientStop],
    ) -> Box<dyn iface::RadialGradientBrush> {
        Box::new(RadialGradientBrush::new(
            center,
            gradient_origin,
            radius,
            stops,
        ))
    }

    fn new_texture_brush(
        &self,
        image: &Arc<dyn iface::Bitmap>,
        opacity: f32,
    ) -> Box<dyn iface::TextureBrush> {
        Box::new(TextureBrush::new(image, opacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iface::{Backend as _, Bitmap as _, FontFamily as _, PixelFormat};

    #[test]
    fn backend_defaults() {
        let backend = HeadlessBackend::new();
        assert_eq!(backend.name(), "headless");
        assert_eq!(backend.default_family_name(), "Sans");
        assert_eq!(backend.default_font_size(), 12.0);
    }

    #[test]
    fn registered_families_are_found() {
        let mut backend = HeadlessBackend::new();
        backend.register_family("Fraktur", &["Regular", "Bold"]);
        let family = backend.find_family("fraktur").unwrap();
        assert_eq!(family.name(), "Fraktur");
        assert_eq!(family.typefaces().len(), 2);
    }

    #[test]
    fn bitmaps_are_created_through_the_factory() {
        let backend = HeadlessBackend::new();
        let bitmap = backend.new_bitmap(Size::new(8, 8), PixelFormat::Rgb24);
        assert_eq!(bitmap.size(), Size::new(8, 8));
        assert_eq!(bitmap.pixel_format(), PixelFormat::Rgb24);
    }
}
