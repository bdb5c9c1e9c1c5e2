//! Blur and glow operations.
//!
//! Both are two-pass gamma-correct Gaussian convolutions; glow additionally
//! scales color channels by a brightness factor, clipping to white.
//! Good background on blurring: <http://www.jhlabs.com/ip/blurring.html>

use log::debug;
use ndarray::{Array3, ArrayView3};

use super::convolve::ConvolveOp;
use super::core::Kernel;
use crate::error::Error;

/// Blur an image using a high-quality two-pass algorithm.
///
/// # Arguments
/// * `image` - Image with 3 or 4 channels (height, width, channels);
///   channel 0 is alpha when there are 4 channels
/// * `radius` - Blur radius (one standard deviation), in pixels
///
/// # Returns
/// A blurred image with the same dimensions and channel count
pub fn blur(image: ArrayView3<u8>, radius: f64) -> Result<Array3<u8>, Error> {
    debug!("blurring with radius {radius}");

    ConvolveOp::new(Kernel::gaussian(radius)).apply(image)
}

/// Brighten an image and blur it, clipping to white.
///
/// # Arguments
/// * `image` - Image with 3 or 4 channels (height, width, channels)
/// * `brightness` - Factor to brighten; 1.0 makes this behave like [`blur`]
/// * `radius` - Blur radius (one standard deviation), in pixels
///
/// # Returns
/// A brightened, blurred image with the same dimensions and channel count
pub fn glow(
    image: ArrayView3<u8>,
    brightness: f64,
    radius: f64,
) -> Result<Array3<u8>, Error> {
    debug!("glowing with brightness {brightness} and radius {radius}");

    ConvolveOp::with_brightness(Kernel::gaussian(radius), brightness).apply(image)
}
