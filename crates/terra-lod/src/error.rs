//! LOD error types.

use thiserror::Error;

/// Rejected terrain or quadtree parameters.
///
/// These are programming or configuration mistakes; a well-formed tree never
/// fails to build or traverse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LodError {
    /// A patch or terrain extent is zero, negative, or not finite.
    #[error("extent must be positive and finite, got {size_x}x{size_y}")]
    InvalidExtent {
        /// Horizontal extent.
        size_x: f32,
        /// Vertical extent.
        size_y: f32,
    },

    /// A patch origin is not finite.
    #[error("origin must be finite, got ({x}, {y})")]
    InvalidOrigin {
        /// Origin x.
        x: f32,
        /// Origin y.
        y: f32,
    },

    /// A focus point that is not finite.
    #[error("focus must be finite, got ({x}, {y})")]
    InvalidFocus {
        /// Focus x.
        x: f32,
        /// Focus y.
        y: f32,
    },

    /// A depth budget above the hard cap.
    #[error("depth budget {depth} exceeds maximum {max}")]
    DepthTooLarge {
        /// Requested budget.
        depth: u8,
        /// Largest allowed budget.
        max: u8,
    },

    /// The patrol step is not positive or overshoots a whole patrol leg.
    #[error("patrol step must be in (0, {max_step}], got {step}")]
    InvalidStep {
        /// Requested step.
        step: f32,
        /// Length of the shortest patrol leg.
        max_step: f32,
    },
}
