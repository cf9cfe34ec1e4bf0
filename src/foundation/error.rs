use crate::foundation::core::TravelVector;

/// Convenience result type used across pixroute.
pub type PixrouteResult<T> = Result<T, PixrouteError>;

/// Top-level error taxonomy for the decode -> trace -> render pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PixrouteError {
    /// Input image missing, unreadable, or with an empty pixel area.
    #[error("image access error: {0}")]
    ImageAccess(String),

    /// A trace stepped off the edge of the grid before reaching a stop cell.
    #[error(
        "out of bounds: trace from ({}, {}) left the {width}x{height} grid at ({}, {}) heading {vector:?}",
        .start.0, .start.1, .at.0, .at.1
    )]
    OutOfBounds {
        /// Start cell of the failing trace.
        start: (u32, u32),
        /// Coordinate the trace tried to enter (may be negative).
        at: (i64, i64),
        /// Travel vector at the time of the step.
        vector: TravelVector,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// A trace exceeded its step budget, usually a closed loop of pass-through cells.
    #[error("step limit: trace from ({}, {}) did not stop within {max_steps} steps", .start.0, .start.1)]
    StepLimit {
        /// Start cell of the failing trace.
        start: (u32, u32),
        /// Configured bound.
        max_steps: usize,
    },

    /// The output image (or report) could not be persisted.
    #[error("write error: {0}")]
    Write(String),

    /// Invalid settings or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixrouteError {
    /// Build a [`PixrouteError::ImageAccess`] value.
    pub fn image_access(msg: impl Into<String>) -> Self {
        Self::ImageAccess(msg.into())
    }

    /// Build a [`PixrouteError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Build a [`PixrouteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `true` for the error raised when a trace runs off the grid.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
