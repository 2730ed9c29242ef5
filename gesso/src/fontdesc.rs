//! The textual font descriptor format.
//!
//! A descriptor is a `+`-separated token list, e.g. `"Arial+Bold+12pt"`.
//! Tokens are trimmed, and empty tokens are discarded. Each token is
//! classified in this order:
//!
//!  1. A size: a number with an optional case-insensitive `pt` suffix
//!     (`"12pt"`, `"9"`). When several appear, the last one wins.
//!  2. A decoration name (`"Underline"`, `"Strikethrough"`, ...).
//!  3. A style name (`"Bold"`, `"Italic"`, `"None"`).
//!  4. Anything else is a name. The first name becomes the family and the
//!     second the typeface; each further name displaces the typeface,
//!     which is folded into the family with a `,` separator.
//!
//! A family name starting with `SystemFont.` (case-insensitive) selects a
//! platform-defined font instead, e.g. `"SystemFont.Bold+14"`. When the
//! part after the prefix is not a known system font name, the whole token
//! stays an ordinary family name.
//!
//! A descriptor containing no tokens at all does not parse.
use crate::iface::{FontDecoration, FontStyle, SystemFont};

const SYSTEM_FONT_PREFIX: &str = "SystemFont.";

/// The result of parsing a font descriptor.
///
/// A `FontSpec` is plain data and names no concrete font; resolution
/// against a backend happens in [`crate::Font::from_spec`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSpec {
    /// The font family name, if the descriptor named one.
    pub family: Option<String>,
    /// The typeface name within the family, if the descriptor named one.
    pub typeface: Option<String>,
    /// The size in points, if the descriptor named one.
    pub size: Option<f32>,
    pub style: FontStyle,
    pub decoration: FontDecoration,
    /// The platform-defined font to use instead of `family`.
    pub system: Option<SystemFont>,
}

impl FontSpec {
    /// Parse a font descriptor. Returns `None` when the descriptor
    /// contains no tokens.
    pub fn parse(descriptor: &str) -> Option<FontSpec> {
        let mut spec = FontSpec::default();
        let mut seen_token = false;

        for token in descriptor.split('+').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            seen_token = true;

            if let Some(size) = parse_size(token) {
                spec.size = Some(size);
            } else if let Some(decoration) = FontDecoration::from_name(token) {
                spec.decoration |= decoration;
            } else if let Some(style) = FontStyle::from_name(token) {
                spec.style |= style;
            } else {
                spec.push_name(token);
            }
        }

        if !seen_token {
            return None;
        }

        spec.recognize_system_font();

        Some(spec)
    }

    /// Record a name token, applying the family/typeface assignment rule
    /// described in the module documentation.
    fn push_name(&mut self, token: &str) {
        if self.family.is_none() {
            self.family = Some(token.to_owned());
            return;
        }

        if let Some(prev) = self.typeface.replace(token.to_owned()) {
            // Third and later names displace the typeface into the family.
            if let Some(family) = &mut self.family {
                family.push(',');
                family.push_str(&prev);
            }
        }
    }

    /// Replace a `SystemFont.`-prefixed family with the system font it
    /// names. An unrecognized name after the prefix leaves the family
    /// untouched.
    fn recognize_system_font(&mut self) {
        let name = match &self.family {
            Some(family) => match family.get(..SYSTEM_FONT_PREFIX.len()) {
                Some(prefix) if prefix.eq_ignore_ascii_case(SYSTEM_FONT_PREFIX) => {
                    family[SYSTEM_FONT_PREFIX.len()..].trim().to_owned()
                }
                _ => return,
            },
            None => return,
        };

        if let Ok(system) = name.parse() {
            self.system = Some(system);
            self.family = None;
        }
    }
}

/// Try to read a token as a size. The optional `pt` suffix is matched
/// case-insensitively, with whitespace allowed before it.
fn parse_size(token: &str) -> Option<f32> {
    let digits = if token.len() >= 2
        && token.is_char_boundary(token.len() - 2)
        && token[token.len() - 2..].eq_ignore_ascii_case("pt")
    {
        token[..token.len() - 2].trim_end()
    } else {
        token
    };

    digits.parse().ok()
}
