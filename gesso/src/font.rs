//! Font handles and descriptor resolution.
use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    backend,
    fontdesc::FontSpec,
    iface::{
        self, Backend as _, Font as _, FontDecoration, FontFamily as _, FontStyle,
        FontTypeface as _, SystemFont,
    },
};

/// A font family known to the active backend.
///
/// Cheap to clone; the underlying object is immutable and shared.
#[derive(Debug, Clone)]
pub struct FontFamily {
    handler: Arc<dyn iface::FontFamily>,
}

impl FontFamily {
    /// Resolve a family name. How unknown names are satisfied is the
    /// backend's business, so this always succeeds.
    pub fn new(name: &str) -> FontFamily {
        FontFamily {
            handler: backend::backend().resolve_family(name),
        }
    }

    /// Look up a family by name. Returns `None` when the active backend
    /// does not know the name.
    pub fn lookup(name: &str) -> Option<FontFamily> {
        backend::backend()
            .find_family(name)
            .map(|handler| FontFamily { handler })
    }

    /// Enumerate the families known to the active backend.
    pub fn available() -> Vec<FontFamily> {
        backend::backend()
            .families()
            .into_iter()
            .map(|handler| FontFamily { handler })
            .collect()
    }

    pub fn name(&self) -> String {
        self.handler.name()
    }

    pub fn typefaces(&self) -> Vec<FontTypeface> {
        self.handler
            .typefaces()
            .into_iter()
            .map(|handler| FontTypeface { handler })
            .collect()
    }
}

/// A specific named variant within a font family.
#[derive(Debug, Clone)]
pub struct FontTypeface {
    handler: Arc<dyn iface::FontTypeface>,
}

impl FontTypeface {
    pub fn name(&self) -> String {
        self.handler.name()
    }

    /// The style flags implied by the typeface.
    pub fn style(&self) -> FontStyle {
        self.handler.style()
    }
}

/// A font handle.
///
/// Cheap to clone; the underlying object is immutable and shared.
#[derive(Debug, Clone)]
pub struct Font {
    handler: Arc<dyn iface::Font>,
}

impl Font {
    /// Construct a font from a family, letting the backend pick a face
    /// matching the style flags.
    pub fn new(
        family: &FontFamily,
        size: f32,
        style: FontStyle,
        decoration: FontDecoration,
    ) -> Font {
        Font {
            handler: family.handler.new_font(size, style, decoration),
        }
    }

    /// Construct a font from an exact typeface. The style is implied by
    /// the typeface.
    pub fn with_typeface(typeface: &FontTypeface, size: f32, decoration: FontDecoration) -> Font {
        Font {
            handler: typeface.handler.new_font(size, decoration),
        }
    }

    /// Construct a font defined by the target platform. `size` overrides
    /// the platform's own size for that font when given.
    pub fn system(which: SystemFont, size: Option<f32>, decoration: FontDecoration) -> Font {
        Font {
            handler: backend::backend().system_font(which, size, decoration),
        }
    }

    /// Resolve a parsed descriptor against the active backend.
    ///
    /// Missing parts are filled from the backend's defaults, so this
    /// always succeeds.
    pub fn from_spec(spec: &FontSpec) -> Font {
        Font {
            handler: resolve_spec(spec, &*backend::backend()),
        }
    }

    pub fn family_name(&self) -> String {
        self.handler.family_name()
    }

    /// The concrete typeface name when the font was built from one.
    pub fn typeface_name(&self) -> Option<String> {
        self.handler.typeface_name()
    }

    /// The font size in points.
    pub fn size(&self) -> f32 {
        self.handler.size()
    }

    pub fn style(&self) -> FontStyle {
        self.handler.style()
    }

    pub fn decoration(&self) -> FontDecoration {
        self.handler.decoration()
    }

    /// The system font this handle was built from, if any.
    pub fn system_font(&self) -> Option<SystemFont> {
        self.handler.system_font()
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.style().contains(FontStyle::BOLD)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.style().contains(FontStyle::ITALIC)
    }
}

/// Returned when a font descriptor cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseFontError;

impl fmt::Display for ParseFontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the font descriptor contains no tokens")
    }
}

impl std::error::Error for ParseFontError {}

impl FromStr for Font {
    type Err = ParseFontError;

    /// Parse a font descriptor (see [`FontSpec`]) and resolve it against
    /// the active backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = FontSpec::parse(s).ok_or(ParseFontError)?;
        Ok(Font::from_spec(&spec))
    }
}

/// Turn a parsed descriptor into a font handle.
///
/// A system font bypasses family lookup; its face and default size come
/// from the backend's system-font table, and the descriptor's style and
/// typeface do not apply. Otherwise a named typeface is matched
/// case-insensitively within the family and, when found, overrides the
/// style flags. Missing family and size fall back to the backend's
/// defaults.
pub(crate) fn resolve_spec(spec: &FontSpec, backend: &dyn iface::Backend) -> Arc<dyn iface::Font> {
    if let Some(system) = spec.system {
        return backend.system_font(system, spec.size, spec.decoration);
    }

    let size = spec.size.unwrap_or_else(|| backend.default_font_size());
    let family = match &spec.family {
        Some(name) => backend.resolve_family(name),
        None => backend.resolve_family(&backend.default_family_name()),
    };

    if let Some(typeface_name) = &spec.typeface {
        let found = family
            .typefaces()
            .into_iter()
            .find(|typeface| typeface.name().eq_ignore_ascii_case(typeface_name));
        if let Some(typeface) = found {
            return typeface.new_font(size, spec.decoration);
        }
    }

    family.new_font(size, spec.style, spec.decoration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;

    fn resolve(descriptor: &str) -> Arc<dyn iface::Font> {
        let _ = env_logger::builder().is_test(true).try_init();
        let backend = HeadlessBackend::new();
        let spec = FontSpec::parse(descriptor).unwrap();
        resolve_spec(&spec, &backend)
    }

    #[test]
    fn size_only_uses_the_default_family() {
        let font = resolve("12pt");
        assert_eq!(font.size(), 12.0);
        assert_eq!(font.family_name(), "Sans");
        assert_eq!(font.style(), FontStyle::empty());
    }

    #[test]
    fn family_only_uses_the_default_size() {
        let font = resolve("Serif");
        assert_eq!(font.family_name(), "Serif");
        assert_eq!(font.size(), 12.0);
    }

    #[test]
    fn style_and_decoration_flags_apply() {
        let font = resolve("Sans+Bold+Underline+10");
        assert_eq!(font.size(), 10.0);
        assert_eq!(font.style(), FontStyle::BOLD);
        assert_eq!(font.decoration(), FontDecoration::UNDERLINE);
        assert_eq!(font.typeface_name(), None);
    }

    #[test]
    fn named_typeface_overrides_style_flags() {
        let font = resolve("Sans+bold italic+Italic+9");
        assert_eq!(font.typeface_name(), Some("Bold Italic".to_owned()));
        assert_eq!(font.style(), FontStyle::BOLD | FontStyle::ITALIC);
        assert_eq!(font.size(), 9.0);
    }

    #[test]
    fn unknown_typeface_falls_back_to_style_flags() {
        let font = resolve("Sans+No Such Face+Bold+9");
        assert_eq!(font.typeface_name(), None);
        assert_eq!(font.style(), FontStyle::BOLD);
    }

    #[test]
    fn unknown_family_is_synthesized() {
        let font = resolve("Bleeding Cowboys+8");
        assert_eq!(font.family_name(), "Bleeding Cowboys");
        assert_eq!(font.size(), 8.0);
    }

    #[test]
    fn system_font_carries_its_own_face() {
        let font = resolve("SystemFont.Bold");
        assert_eq!(font.system_font(), Some(SystemFont::Bold));
        assert_eq!(font.style(), FontStyle::BOLD);
        assert_eq!(font.size(), 12.0);
    }

    #[test]
    fn system_font_size_override() {
        assert_eq!(resolve("SystemFont.ToolTip").size(), 10.0);
        assert_eq!(resolve("SystemFont.ToolTip+14").size(), 14.0);
    }

    #[test]
    fn system_font_ignores_style_tokens() {
        let font = resolve("SystemFont.Default+Italic");
        assert_eq!(font.system_font(), Some(SystemFont::Default));
        assert_eq!(font.style(), FontStyle::empty());
    }

    #[test]
    fn from_str_goes_through_the_active_backend() {
        let font: Font = "Arial+Bold+12pt".parse().unwrap();
        assert_eq!(font.family_name(), "Arial");
        assert!(font.is_bold());
        assert_eq!(font.size(), 12.0);

        assert!("".parse::<Font>().is_err());
    }
}
