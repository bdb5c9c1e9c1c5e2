//! WebAssembly exports for the convolution engine.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as flat byte arrays of length `width * height * channels`,
//! row-major and pixel-interleaved; channel 0 is alpha when there are 4
//! channels.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::filters::blur::{blur, glow};
use crate::filters::shadow::make_shadow;

/// Blur an image with a gamma-correct two-pass Gaussian convolution.
///
/// # Arguments
/// * `data` - Flat image bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 (opaque) or 4 (channel 0 alpha)
/// * `radius` - Blur radius, one standard deviation
///
/// # Returns
/// Flat bytes of the blurred image, same length
#[wasm_bindgen]
pub fn blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    radius: f64,
) -> Vec<u8> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let result = blur(input.view(), radius).expect("unsupported image format");
    result.into_raw_vec_and_offset().0
}

/// Brighten and blur an image, clipping to white.
///
/// # Arguments
/// * `brightness` - Factor to brighten; 1.0 is a plain blur
/// * `radius` - Blur radius, one standard deviation
#[wasm_bindgen]
pub fn glow_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    brightness: f64,
    radius: f64,
) -> Vec<u8> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let result = glow(input.view(), brightness, radius).expect("unsupported image format");
    result.into_raw_vec_and_offset().0
}

/// Build the soft black shadow cast by a 4-channel image's alpha plane.
///
/// # Arguments
/// * `data` - Flat image bytes (length = width * height * 4), channel 0 alpha
/// * `radius` - Size of the shadow, in pixels
/// * `darkness` - 0.0 means no shadow, 1.0 the darkest
#[wasm_bindgen]
pub fn drop_shadow_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: f64,
    darkness: f64,
) -> Vec<u8> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .expect("Invalid dimensions");

    let result = make_shadow(input.view(), radius, darkness).expect("unsupported image format");
    result.into_raw_vec_and_offset().0
}
