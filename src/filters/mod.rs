//! Filter modules of the convolution engine.
//!
//! ## Supported Formats
//!
//! All operations accept images shaped (height, width, channels) with one
//! byte per channel:
//!
//! | Format | Shape | Description |
//! |--------|-------|-------------|
//! | Opaque color | (H, W, 3) | Gamma-encoded color, no alpha |
//! | Color + alpha | (H, W, 4) | Channel 0 linear alpha, channels 1-3 gamma-encoded color |
//!
//! Any other channel count is rejected before any pixel work happens.
//!
//! ## Architecture
//!
//! - **core** - gamma lookup table and kernel construction
//! - **convolve** - the two-pass, transpose-on-write separable convolver
//! - **blur** - blur and glow operations on top of the convolver
//! - **shadow** - drop-shadow derivation from the alpha channel

pub mod blur;
pub mod convolve;
pub mod core;
pub mod shadow;
