use crate::{decode::directive::Directive, foundation::core::TravelVector};

/// Outcome of entering a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Keep walking along this vector.
    Continue(TravelVector),
    /// The cell just entered ends the path.
    Terminate,
}

/// Travel vector after entering a cell carrying `directive`.
///
/// Start markers met mid-path are pass-through, like unknown colors.
pub fn next_vector(current: TravelVector, directive: Directive) -> Turn {
    match directive {
        Directive::Stop => Turn::Terminate,
        Directive::Left => Turn::Continue(current.rotate_left()),
        Directive::Right => Turn::Continue(current.rotate_right()),
        Directive::None | Directive::StartUp | Directive::StartLeft => Turn::Continue(current),
    }
}

/// Initial travel vector of a start cell, `None` when `directive` is not a start marker.
pub fn start_vector(directive: Directive) -> Option<TravelVector> {
    directive.start_vector()
}

#[cfg(test)]
#[path = "../../tests/unit/trace/turn.rs"]
mod tests;
