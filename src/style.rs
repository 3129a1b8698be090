//! Text styling with attributes and colors.
//!
//! [`Style`] is the handle passed to [`Surface::write_styled`]; the editor
//! itself only ever needs one style (the ghost suggestion), but surfaces
//! accept any combination of colors and attributes.
//!
//! [`Surface::write_styled`]: crate::surface::Surface::write_styled

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, dim, italic, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Dim/decreased intensity.
        const DIM       = 0x02;
        /// Italic (not widely supported).
        const ITALIC    = 0x04;
        /// Underlined text.
        const UNDERLINE = 0x08;
        /// Swapped foreground/background.
        const INVERSE   = 0x10;
    }
}

/// A complete text style: optional colors plus attributes.
///
/// `None` colors mean "leave the terminal default alone".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Text attributes.
    pub attrs: TextAttributes,
}

impl Style {
    /// The empty style (terminal defaults, no attributes).
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attrs: TextAttributes::empty(),
    };

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attrs: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Rgb) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attrs: TextAttributes::empty(),
        }
    }

    /// The default ghost suggestion style: dim dark gray.
    #[must_use]
    pub const fn ghost() -> Self {
        Self {
            fg: Some(Rgb::DARK_GRAY),
            bg: None,
            attrs: TextAttributes::DIM,
        }
    }

    /// Return this style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.attrs = self.attrs.union(TextAttributes::BOLD);
        self
    }

    /// Return this style with the dim attribute added.
    #[must_use]
    pub const fn with_dim(mut self) -> Self {
        self.attrs = self.attrs.union(TextAttributes::DIM);
        self
    }

    /// Return this style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(mut self) -> Self {
        self.attrs = self.attrs.union(TextAttributes::ITALIC);
        self
    }

    /// Return this style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(mut self) -> Self {
        self.attrs = self.attrs.union(TextAttributes::UNDERLINE);
        self
    }

    /// Whether this style changes nothing.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Rgb::RED).with_bold().with_underline();
        assert_eq!(style.fg, Some(Rgb::RED));
        assert!(style.attrs.contains(TextAttributes::BOLD));
        assert!(style.attrs.contains(TextAttributes::UNDERLINE));
        assert!(!style.attrs.contains(TextAttributes::DIM));
    }

    #[test]
    fn test_ghost_style() {
        let ghost = Style::ghost();
        assert_eq!(ghost.fg, Some(Rgb::DARK_GRAY));
        assert!(ghost.attrs.contains(TextAttributes::DIM));
        assert!(ghost.bg.is_none());
    }

    #[test]
    fn test_is_none() {
        assert!(Style::NONE.is_none());
        assert!(!Style::fg(Rgb::WHITE).is_none());
        assert!(!Style::NONE.with_dim().is_none());
    }
}
