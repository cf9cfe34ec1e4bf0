use crate::foundation::error::{PixrouteError, PixrouteResult};

/// Straight-alpha RGBA8 color as sampled from the input image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (carried through, never used for directive decisions).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, the blank value of a freshly allocated output image.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black, the ink used for traced cells.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from a 4-byte RGBA pixel.
    pub fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// The color as a 4-byte RGBA pixel.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The `(r, g, b)` triple, alpha dropped.
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> PixrouteResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> PixrouteResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| PixrouteError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PixrouteError::validation(format!(
                "hex color \"{s}\" has non-hex digits"
            )));
        }

        match s.len() {
            6 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                255,
            )),
            8 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(PixrouteError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }
}

/// Unit step across the grid in image coordinates (`y` grows downward).
///
/// Only the four cardinal directions exist, so exactly one of `dx`/`dy` is `±1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TravelVector {
    /// `(0, -1)`
    Up,
    /// `(1, 0)`
    Right,
    /// `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
}

impl TravelVector {
    /// All four vectors in clockwise order starting at `Up`.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The `(dx, dy)` step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Counter-clockwise quarter turn: `up -> left -> down -> right -> up`.
    pub fn rotate_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Clockwise quarter turn: `up -> right -> down -> left -> up`.
    pub fn rotate_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
