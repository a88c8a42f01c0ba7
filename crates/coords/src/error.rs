//! The error type shared by the position values.

use thiserror::Error;

use crate::direction::Direction;

/// Errors surfaced by position decoding and arithmetic.
///
/// Decoding either succeeds or fails whole -- there is no partial or
/// best-effort result. World resolution failures are not represented here:
/// the registry boundary reports an unknown world as `None` (see
/// [`WorldRegistry`](crate::registry::WorldRegistry)).
#[derive(Debug, Error)]
pub enum PositionError {
    /// The payload was not an object carrying every required field, or a
    /// field held the wrong type.
    #[error("malformed position payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A vertical direction was given to an offset that moves on the
    /// horizontal chunk grid, which has no vertical axis.
    #[error("`{0}` cannot offset a chunk position")]
    VerticalOffset(Direction),
}
