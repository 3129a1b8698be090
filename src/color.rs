//! Terminal colors.
//!
//! No alpha channel and no blending: this crate only ever writes whole
//! styled runs, so colors are plain 24-bit RGB triples.

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// The muted gray used for ghost suggestion text by default (the
    /// Campbell palette's dark gray).
    pub const DARK_GRAY: Self = Self::new(0x76, 0x76, 0x76);

    /// Create a color from u8 RGB components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Get the components as a tuple.
    #[must_use]
    pub const fn to_rgb_u8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
