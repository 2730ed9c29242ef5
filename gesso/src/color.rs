//! Device-independent colors.
use crate::iface::RGBAF32;
use rgb::RGBA;

/// A color with unpremultiplied floating-point components in the range
/// `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    /// An opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| (argb >> shift & 0xff) as f32 / 255.0;
        Self {
            a: channel(24),
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Encode as a packed `0xAARRGGBB` value. Components are clamped to
    /// `0.0..=1.0` and rounded to the nearest 8-bit level.
    pub fn to_argb(&self) -> u32 {
        let channel = |x: f32| (x.max(0.0).min(1.0) * 255.0 + 0.5) as u32;
        channel(self.a) << 24 | channel(self.r) << 16 | channel(self.g) << 8 | channel(self.b)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl From<RGBAF32> for Color {
    fn from(x: RGBAF32) -> Self {
        Self {
            r: x.r,
            g: x.g,
            b: x.b,
            a: x.a,
        }
    }
}

impl From<Color> for RGBAF32 {
    fn from(x: Color) -> Self {
        RGBA::new(x.r, x.g, x.b, x.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trip() {
        for &packed in &[0x00000000u32, 0xffffffff, 0x80402010, 0xff123456] {
            assert_eq!(Color::from_argb(packed).to_argb(), packed);
        }
    }

    #[test]
    fn from_argb_components() {
        let c = Color::from_argb(0xff8000ff);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn to_argb_clamps() {
        let c = Color::rgba(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c.to_argb() >> 24, 0xff);
        assert_eq!(c.to_argb() >> 16 & 0xff, 0xff);
        assert_eq!(c.to_argb() >> 8 & 0xff, 0x00);
    }

    #[test]
    fn palette_is_opaque() {
        assert!(Color::BLACK.is_opaque());
        assert!(Color::MAGENTA.is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());
    }

    #[test]
    fn rgba_interop() {
        let c: Color = RGBA::new(0.1, 0.2, 0.3, 0.4).into();
        assert_eq!(c, Color::rgba(0.1, 0.2, 0.3, 0.4));
        let back: RGBAF32 = c.into();
        assert_eq!(back, RGBA::new(0.1, 0.2, 0.3, 0.4));
    }
}
