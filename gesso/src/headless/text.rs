//! Fonts for the headless backend.
//!
//! There is no real text system behind this module. Families live in an
//! in-memory registry seeded with three generic families, each carrying
//! the four standard typefaces. Asking for an unknown family synthesizes
//! one with the same four typefaces, so lookups never fail.
use flags_macro::flags;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use super::super::iface::{self, FontDecoration, FontStyle, SystemFont};

pub(super) const DEFAULT_FAMILY: &str = "Sans";
pub(super) const DEFAULT_SIZE: f32 = 12.0;

/// The size of auxiliary UI text (tooltips, status bars).
const SMALL_SIZE: f32 = 10.0;

const STANDARD_TYPEFACES: &[&str] = &["Regular", "Bold", "Italic", "Bold Italic"];

const BUILTIN_FAMILIES: &[&str] = &["Sans", "Serif", "Monospace"];

/// The set of families known to a [`super::HeadlessBackend`].
#[derive(Debug)]
pub(super) struct FontRegistry {
    families: Vec<Arc<FontFamily>>,
    /// Family names a synthesis warning was already emitted for.
    warned: Mutex<HashSet<String>>,
}

impl FontRegistry {
    pub(super) fn with_builtin_families() -> Self {
        let mut registry = Self {
            families: Vec::new(),
            warned: Mutex::new(HashSet::new()),
        };
        for name in BUILTIN_FAMILIES {
            registry.register(name, STANDARD_TYPEFACES);
        }
        registry
    }

    /// Add a family, replacing an existing one with the same name.
    pub(super) fn register(&mut self, name: &str, typefaces: &[&str]) {
        self.families
            .retain(|family| !family.name.eq_ignore_ascii_case(name));
        self.families.push(Arc::new(FontFamily::new(name, typefaces)));
    }

    pub(super) fn families(&self) -> Vec<Arc<dyn iface::FontFamily>> {
        self.families
            .iter()
            .map(|family| Arc::clone(family) as Arc<dyn iface::FontFamily>)
            .collect()
    }

    pub(super) fn find(&self, name: &str) -> Option<Arc<dyn iface::FontFamily>> {
        self.families
            .iter()
            .find(|family| family.name.eq_ignore_ascii_case(name))
            .map(|family| Arc::clone(family) as Arc<dyn iface::FontFamily>)
    }

    /// Like [`FontRegistry::find`], but synthesizes a family when the name
    /// is unknown. Synthesized families are not retained, so they do not
    /// show up in [`FontRegistry::families`].
    pub(super) fn resolve(&self, name: &str) -> Arc<dyn iface::FontFamily> {
        if let Some(family) = self.find(name) {
            return family;
        }

        if self.warned.lock().unwrap().insert(name.to_owned()) {
            log::warn!("unknown font family {:?}, synthesizing one", name);
        }
        Arc::new(FontFamily::new(name, STANDARD_TYPEFACES))
    }
}

#[derive(Debug)]
pub struct FontFamily {
    name: String,
    typefaces: Vec<Arc<FontTypeface>>,
}

impl FontFamily {
    fn new(name: &str, typefaces: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            typefaces: typefaces
                .iter()
                .map(|&typeface| {
                    Arc::new(FontTypeface {
                        family: name.to_owned(),
                        name: typeface.to_owned(),
                        style: style_for_typeface(typeface),
                    })
                })
                .collect(),
        }
    }
}

impl iface::FontFamily for FontFamily {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn typefaces(&self) -> Vec<Arc<dyn iface::FontTypeface>> {
        self.typefaces
            .iter()
            .map(|typeface| Arc::clone(typeface) as Arc<dyn iface::FontTypeface>)
            .collect()
    }

    fn new_font(&self, size: f32, style: FontStyle, decoration: FontDecoration) -> Arc<dyn iface::Font> {
        Arc::new(Font {
            family: self.name.clone(),
            typeface: None,
            size,
            style,
            decoration,
            system: None,
        })
    }
}

#[derive(Debug)]
pub struct FontTypeface {
    family: String,
    name: String,
    style: FontStyle,
}

impl iface::FontTypeface for FontTypeface {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn new_font(&self, size: f32, decoration: FontDecoration) -> Arc<dyn iface::Font> {
        Arc::new(Font {
            family: self.family.clone(),
            typeface: Some(self.name.clone()),
            size,
            style: self.style,
            decoration,
            system: None,
        })
    }
}

/// Derive style flags from a typeface name.
fn style_for_typeface(name: &str) -> FontStyle {
    let lower = name.to_lowercase();
    let mut style = flags![FontStyle::{}];
    if lower.contains("bold") {
        style |= FontStyle::BOLD;
    }
    if lower.contains("italic") || lower.contains("oblique") {
        style |= FontStyle::ITALIC;
    }
    style
}

/// The system-font table of the headless backend. Every system font maps
/// to the default family; only the style and size vary.
pub(super) fn system_font(
    which: SystemFont,
    size: Option<f32>,
    decoration: FontDecoration,
) -> Arc<dyn iface::Font> {
    let style = match which {
        SystemFont::Bold | SystemFont::TitleBar => flags![FontStyle::{BOLD}],
        SystemFont::Default
        | SystemFont::ToolTip
        | SystemFont::Label
        | SystemFont::MenuBar
        | SystemFont::Menu
        | SystemFont::Message
        | SystemFont::Palette
        | SystemFont::StatusBar
        | SystemFont::User => flags![FontStyle::{}],
    };

    let default_size = match which {
        SystemFont::ToolTip | SystemFont::Palette | SystemFont::StatusBar => SMALL_SIZE,
        SystemFont::Default
        | SystemFont::Bold
        | SystemFont::TitleBar
        | SystemFont::Label
        | SystemFont::MenuBar
        | SystemFont::Menu
        | SystemFont::Message
        | SystemFont::User => DEFAULT_SIZE,
    };

    Arc::new(Font {
        family: DEFAULT_FAMILY.to_owned(),
        typeface: None,
        size: size.unwrap_or(default_size),
        style,
        decoration,
        system: Some(which),
    })
}

#[derive(Debug)]
pub struct Font {
    family: String,
    typeface: Option<String>,
    size: f32,
    style: FontStyle,
    decoration: FontDecoration,
    system: Option<SystemFont>,
}

impl iface::Font for Font {
    fn family_name(&self) -> String {
        self.family.clone()
    }

    fn typeface_name(&self) -> Option<String> {
        self.typeface.clone()
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn decoration(&self) -> FontDecoration {
        self.decoration
    }

    fn system_font(&self) -> Option<SystemFont> {
        self.system
    }
}
