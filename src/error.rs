//! Error types for the convolution engine.

use thiserror::Error;

/// Errors reported by the convolution operations.
///
/// All of these are reported before any pixel work happens; a convolution
/// either completes for the whole buffer or does not run at all.
#[derive(Error, Debug)]
pub enum Error {
    /// A custom kernel weight sequence had an even (or zero) length, so no
    /// center tap exists.
    #[error("kernel length must be odd, got {0}")]
    EvenKernel(usize),

    /// The image channel count is not one this engine processes.
    #[error("unsupported channel count {got}, expected {expected}")]
    UnsupportedChannels { got: usize, expected: &'static str },

    /// The destination buffer could not be allocated.
    #[error("failed to allocate {0} bytes for the destination image")]
    Allocation(usize),
}
