//! Defines an abstract interface to the backend implementation.
//!
//! This module defines one object-safe trait per drawing primitive, plus
//! the plain data types shared across the boundary. The public wrapper
//! types in the crate root hold handles to objects created through these
//! traits and forward every operation to them.
//!
//! The parent module provides the wrapper types as well as simple
//! re-exports of the non-generic types defined here.
use bitflags::bitflags;
use rgb::RGBA;
use std::{any::Any, fmt::Debug, str::FromStr, sync::Arc};

use crate::{
    color::Color,
    geometry::{PointF, RectangleF, Size, SizeF},
};

pub type RGBAF32 = RGBA<f32>;

bitflags! {
    /// Style flags selecting a variant within a font family.
    pub struct FontStyle: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle::empty()
    }
}

impl FontStyle {
    /// Match a single style token, case-insensitively. `"None"` maps to
    /// the empty set.
    pub fn from_name(name: &str) -> Option<FontStyle> {
        match name.to_lowercase().as_str() {
            "none" => Some(FontStyle::empty()),
            "bold" => Some(FontStyle::BOLD),
            "italic" => Some(FontStyle::ITALIC),
            _ => None,
        }
    }
}

bitflags! {
    /// Decorations drawn over or under text, independent of the typeface.
    pub struct FontDecoration: u8 {
        const UNDERLINE = 1;
        const OVERLINE = 1 << 1;
        const STRIKETHROUGH = 1 << 2;
    }
}

impl Default for FontDecoration {
    fn default() -> Self {
        FontDecoration::empty()
    }
}

impl FontDecoration {
    /// Match a single decoration token, case-insensitively. `"None"` maps
    /// to the empty set.
    pub fn from_name(name: &str) -> Option<FontDecoration> {
        match name.to_lowercase().as_str() {
            "none" => Some(FontDecoration::empty()),
            "underline" => Some(FontDecoration::UNDERLINE),
            "overline" => Some(FontDecoration::OVERLINE),
            "strikethrough" => Some(FontDecoration::STRIKETHROUGH),
            _ => None,
        }
    }
}

/// Identifies a font defined by the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemFont {
    /// The default UI font.
    Default,
    /// The bold variant of the default UI font.
    Bold,
    TitleBar,
    ToolTip,
    Label,
    MenuBar,
    Menu,
    /// The font used for message boxes.
    Message,
    Palette,
    StatusBar,
    /// The font used for editable documents.
    User,
}

impl SystemFont {
    /// Match a system font name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(SystemFont::Default),
            "bold" => Some(SystemFont::Bold),
            "titlebar" => Some(SystemFont::TitleBar),
            "tooltip" => Some(SystemFont::ToolTip),
            "label" => Some(SystemFont::Label),
            "menubar" => Some(SystemFont::MenuBar),
            "menu" => Some(SystemFont::Menu),
            "message" => Some(SystemFont::Message),
            "palette" => Some(SystemFont::Palette),
            "statusbar" => Some(SystemFont::StatusBar),
            "user" => Some(SystemFont::User),
            _ => None,
        }
    }
}

impl FromStr for SystemFont {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(())
    }
}

/// The memory layout of bitmap pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 24 bits per pixel, one byte per RGB component, no alpha channel.
    Rgb24,
    /// 32 bits per pixel, RGB components and a padding byte.
    Rgb32,
    /// 32 bits per pixel, RGB components and an alpha channel.
    Rgba32,
}

impl PixelFormat {
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb24 => 24,
            PixelFormat::Rgb32 | PixelFormat::Rgba32 => 32,
        }
    }
}

/// A color at a position along a gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// The position along the gradient axis, in `0.0..=1.0`.
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    /// Construct a stop, clamping `offset` to `0.0..=1.0`.
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.max(0.0).min(1.0),
            color,
        }
    }
}

/// How a gradient paints outside its defining geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientWrapMode {
    /// Extend the terminal colors indefinitely.
    Pad,
    /// Repeat the gradient.
    Repeat,
    /// Repeat the gradient, reversing direction on every repetition.
    Reflect,
}

impl Default for GradientWrapMode {
    fn default() -> Self {
        GradientWrapMode::Pad
    }
}

/// Returned when a drawing backend has already been selected for the
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendAlreadySet;

impl std::fmt::Display for BackendAlreadySet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a drawing backend has already been selected")
    }
}

impl std::error::Error for BackendAlreadySet {}

/// The factory interface implemented by each backend.
///
/// A backend is selected once per process (see [`crate::set_backend`]);
/// every public drawing type forwards its operations to objects created
/// here.
pub trait Backend: Debug + Send + Sync {
    /// A short name identifying the backend, used for diagnostics.
    fn name(&self) -> &'static str;

    /// The family name substituted when a font descriptor names no family.
    fn default_family_name(&self) -> String;

    /// The size substituted when a font descriptor names no size.
    fn default_font_size(&self) -> f32;

    /// Enumerate the font families known to the backend.
    fn families(&self) -> Vec<Arc<dyn FontFamily>>;

    /// Look up a font family by name. Returns `None` when the name is
    /// unknown to the backend.
    fn find_family(&self, name: &str) -> Option<Arc<dyn FontFamily>>;

    /// Resolve a family name to a usable family. How unknown names are
    /// satisfied (fallback, synthesis) is the backend's business; the
    /// method must not fail.
    fn resolve_family(&self, name: &str) -> Arc<dyn FontFamily>;

    /// Construct a font from a platform-defined system font.
    ///
    /// `size` overrides the size from the backend's system-font table
    /// when given.
    fn system_font(
        &self,
        which: SystemFont,
        size: Option<f32>,
        decoration: FontDecoration,
    ) -> Arc<dyn Font>;

    /// Create a bitmap with the given dimensions and pixel format.
    fn new_bitmap(&self, size: Size, format: PixelFormat) -> Arc<dyn Bitmap>;

    /// Create an empty region.
    fn new_region(&self) -> Box<dyn Region>;

    fn new_solid_brush(&self, color: Color) -> Box<dyn SolidBrush>;

    /// `stops` is ordered by ascending offset.
    fn new_linear_gradient_brush(
        &self,
        start: PointF,
        end: PointF,
        stops: &[GradientStop],
    ) -> Box<dyn LinearGradientBrush>;

    /// `stops` is ordered by ascending offset.
    fn new_radial_gradient_brush(
        &self,
        center: PointF,
        gradient_origin: PointF,
        radius: SizeF,
        stops: &[GradientStop],
    ) -> Box<dyn RadialGradientBrush>;

    fn new_texture_brush(&self, image: &Arc<dyn Bitmap>, opacity: f32) -> Box<dyn TextureBrush>;
}

/// A named collection of typefaces.
pub trait FontFamily: Debug + Send + Sync {
    /// The family name.
    fn name(&self) -> String;

    /// Enumerate the typefaces contained in the family.
    fn typefaces(&self) -> Vec<Arc<dyn FontTypeface>>;

    /// Construct a font from the family using style flags.
    fn new_font(&self, size: f32, style: FontStyle, decoration: FontDecoration) -> Arc<dyn Font>;
}

/// A specific named variant within a font family.
pub trait FontTypeface: Debug + Send + Sync {
    /// The typeface name, unique within its family.
    fn name(&self) -> String;

    /// The style flags implied by the typeface.
    fn style(&self) -> FontStyle;

    /// Construct a font from this exact typeface. The style is implied by
    /// the typeface and cannot be overridden.
    fn new_font(&self, size: f32, decoration: FontDecoration) -> Arc<dyn Font>;
}

/// An immutable, thread-safe font handle.
pub trait Font: Debug + Send + Sync {
    fn family_name(&self) -> String;

    /// The concrete typeface name when the font was built from one.
    fn typeface_name(&self) -> Option<String>;

    /// The font size in points.
    fn size(&self) -> f32;

    fn style(&self) -> FontStyle;

    fn decoration(&self) -> FontDecoration;

    /// The system font this handle was built from, if any.
    fn system_font(&self) -> Option<SystemFont>;
}

/// An immutable, ref-counted bitmap image.
pub trait Bitmap: Debug + Send + Sync {
    /// Get the dimensions of the bitmap.
    fn size(&self) -> Size;

    /// Get the pixel format the bitmap was created with.
    fn pixel_format(&self) -> PixelFormat;

    /// Return `self` as [`Any`] so a backend can recover its concrete
    /// bitmap type when one is passed back through this interface.
    fn as_any(&self) -> &dyn Any;
}

/// A mutable set of rectangular areas.
pub trait Region: Debug {
    /// Add a rectangle to the region.
    fn union_rect(&mut self, rect: RectangleF);

    /// Restrict the region to its intersection with a rectangle.
    fn intersect_rect(&mut self, rect: RectangleF);

    /// Displace the region.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Check whether the region contains a point.
    fn contains(&self, point: PointF) -> bool;

    /// The bounding rectangle of the region. Empty for an empty region.
    fn bounds(&self) -> RectangleF;

    fn is_empty(&self) -> bool;
}

/// A single-color paint source.
pub trait SolidBrush: Debug {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
}

/// A paint source interpolating colors along a line segment.
pub trait LinearGradientBrush: Debug {
    fn start(&self) -> PointF;
    fn end(&self) -> PointF;

    /// The color stops, ordered by ascending offset.
    fn stops(&self) -> Vec<GradientStop>;

    fn wrap(&self) -> GradientWrapMode;
    fn set_wrap(&mut self, wrap: GradientWrapMode);
}

/// A paint source interpolating colors radially around an origin point.
pub trait RadialGradientBrush: Debug {
    fn center(&self) -> PointF;
    fn gradient_origin(&self) -> PointF;
    fn radius(&self) -> SizeF;

    /// The color stops, ordered by ascending offset.
    fn stops(&self) -> Vec<GradientStop>;

    fn wrap(&self) -> GradientWrapMode;
    fn set_wrap(&mut self, wrap: GradientWrapMode);
}

/// A paint source tiling a bitmap image.
pub trait TextureBrush: Debug {
    fn image(&self) -> Arc<dyn Bitmap>;

    /// The opacity applied to the image, in `0.0..=1.0`.
    fn opacity(&self) -> f32;

    /// Set the opacity. Implementations clamp the value to `0.0..=1.0`.
    fn set_opacity(&mut self, opacity: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names() {
        assert_eq!(FontStyle::from_name("bold"), Some(FontStyle::BOLD));
        assert_eq!(FontStyle::from_name("BOLD"), Some(FontStyle::BOLD));
        assert_eq!(FontStyle::from_name("Italic"), Some(FontStyle::ITALIC));
        assert_eq!(FontStyle::from_name("None"), Some(FontStyle::empty()));
        assert_eq!(FontStyle::from_name("Underline"), None);
        assert_eq!(FontStyle::from_name(""), None);
    }

    #[test]
    fn decoration_names() {
        assert_eq!(
            FontDecoration::from_name("underline"),
            Some(FontDecoration::UNDERLINE)
        );
        assert_eq!(
            FontDecoration::from_name("STRIKETHROUGH"),
            Some(FontDecoration::STRIKETHROUGH)
        );
        assert_eq!(
            FontDecoration::from_name("Overline"),
            Some(FontDecoration::OVERLINE)
        );
        assert_eq!(FontDecoration::from_name("None"), Some(FontDecoration::empty()));
        assert_eq!(FontDecoration::from_name("Bold"), None);
    }

    #[test]
    fn system_font_names() {
        assert_eq!(SystemFont::from_name("bold"), Some(SystemFont::Bold));
        assert_eq!(SystemFont::from_name("TitleBar"), Some(SystemFont::TitleBar));
        assert_eq!(SystemFont::from_name("STATUSBAR"), Some(SystemFont::StatusBar));
        assert_eq!(SystemFont::from_name("serif"), None);
        assert_eq!("menu".parse(), Ok(SystemFont::Menu));
        assert!("".parse::<SystemFont>().is_err());
    }

    #[test]
    fn gradient_stop_clamps_offset() {
        assert_eq!(GradientStop::new(-0.5, Color::BLACK).offset, 0.0);
        assert_eq!(GradientStop::new(1.5, Color::BLACK).offset, 1.0);
        assert_eq!(GradientStop::new(0.25, Color::BLACK).offset, 0.25);
    }

    #[test]
    fn pixel_format_sizes() {
        assert_eq!(PixelFormat::Rgb24.bits_per_pixel(), 24);
        assert_eq!(PixelFormat::Rgb32.bits_per_pixel(), 32);
        assert_eq!(PixelFormat::Rgba32.bits_per_pixel(), 32);
    }
}
