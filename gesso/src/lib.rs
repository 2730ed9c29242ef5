//! Platform-independent drawing model.
//!
//! This crate provides the value types and object handles a GUI toolkit
//! needs to describe drawing: colors, geometry, fonts, brushes, bitmap
//! images, and regions. The object handles are backend-agnostic; each
//! wraps an object created by the drawing backend selected for the
//! process.
//!
//! A backend implements the traits in [`iface`] and is installed with
//! [`set_backend`], at most once per process and before the first
//! drawing operation. When no backend was installed, the first operation
//! falls back to [`headless`], which implements the whole interface in
//! memory and needs no display.
//!
//! Fonts can be described in a compact textual format such as
//! `"Arial+Bold+12pt"` or `"SystemFont.Bold+14"`. [`FontSpec`] parses
//! the format; [`Font`] implements [`std::str::FromStr`] on top of it,
//! so `"Arial+Bold+12pt".parse::<Font>()` works too.

pub mod iface;

/// Re-exports traits from `iface`.
pub mod prelude {
    pub use super::iface::{
        Backend, Bitmap, Font, FontFamily, FontTypeface, LinearGradientBrush,
        RadialGradientBrush, Region, SolidBrush, TextureBrush,
    };
}

// ============================================================================
//
// Backend selection and the backends implementing the interface.

mod backend;
pub mod headless;

pub use self::backend::{backend, set_backend};

// ============================================================================
//
// The drawing model types. The object handles among them forward to
// objects created by the active backend.

mod brush;
mod color;
mod font;
mod fontdesc;
mod geometry;
mod image;
mod region;

pub use self::brush::{LinearGradientBrush, RadialGradientBrush, SolidBrush, TextureBrush};
pub use self::color::Color;
pub use self::font::{Font, FontFamily, FontTypeface, ParseFontError};
pub use self::fontdesc::FontSpec;
pub use self::geometry::{
    Padding, ParseGeometryError, Point, PointF, Rectangle, RectangleF, Size, SizeF,
};
pub use self::image::Bitmap;
pub use self::region::Region;

// ============================================================================
//
// Re-exports of the plain data types shared with the backend interface.

pub use self::iface::{
    BackendAlreadySet, FontDecoration, FontStyle, GradientStop, GradientWrapMode, PixelFormat,
    SystemFont, RGBAF32,
};
