use crate::foundation::core::{Rgba8, TravelVector};

/// Semantic meaning of a pixel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Begins a path heading up.
    StartUp,
    /// Begins a path heading left.
    StartLeft,
    /// Ends a path, inclusive of the cell itself.
    Stop,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Pass-through.
    None,
}

/// Fixed palette, checked in order. Alpha is not part of the key.
pub const DIRECTIVE_TABLE: [((u8, u8, u8), Directive); 5] = [
    ((7, 84, 19), Directive::StartUp),
    ((139, 57, 137), Directive::StartLeft),
    ((51, 69, 169), Directive::Stop),
    ((182, 149, 72), Directive::Right),
    ((123, 131, 154), Directive::Left),
];

impl Directive {
    /// `true` for `StartUp` and `StartLeft`.
    pub fn is_start(self) -> bool {
        matches!(self, Self::StartUp | Self::StartLeft)
    }

    /// Initial travel vector for a start directive, `None` for everything else.
    pub fn start_vector(self) -> Option<TravelVector> {
        match self {
            Self::StartUp => Some(TravelVector::Up),
            Self::StartLeft => Some(TravelVector::Left),
            _ => None,
        }
    }
}

/// Map a color to its directive; unknown colors decode to [`Directive::None`].
pub fn decode_directive(color: Rgba8) -> Directive {
    let rgb = color.rgb();
    DIRECTIVE_TABLE
        .iter()
        .find(|(key, _)| *key == rgb)
        .map(|(_, d)| *d)
        .unwrap_or(Directive::None)
}

#[cfg(test)]
#[path = "../../tests/unit/decode/directive.rs"]
mod tests;
