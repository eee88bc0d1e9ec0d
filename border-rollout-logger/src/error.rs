//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// A channel required by a figure or table was never logged.
    #[error("Channel not found: {0}")]
    MissingChannel(String),

    /// Samples of a channel do not line up with the rest of the table.
    #[error("Shape mismatch in channel {channel}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Name of the channel.
        channel: String,
        /// Expected number of rows or columns.
        expected: usize,
        /// Observed number of rows or columns.
        actual: usize,
    },

    /// A boxed reward value holds other than exactly one element.
    #[error("Reward value for {key} is not a scalar: {len} elements")]
    NotAScalar {
        /// Name of the reward term.
        key: String,
        /// Number of elements in the boxed value.
        len: usize,
    },

    /// Rendering was stopped before completion.
    #[error("Rendering was cancelled")]
    Cancelled,

    /// Error reported by the drawing backend.
    #[error("Plot error: {0}")]
    Plot(String),
}
