//! Gamma-aware convolution engine for raster images.
//!
//! This crate is the blur core of a raster-image manipulation library: a
//! separable, two-pass Gaussian convolution over 8-bit images, the glow
//! (brightened blur) variant, and the drop-shadow derivation built on top.
//! Three things distinguish it from a naive convolution:
//!
//! - Color channels are decoded to linear light before the weighted sum and
//!   re-encoded afterwards, so blending happens on physical intensities
//!   rather than on the display-gamma curve.
//! - Color contributions are weighted by source alpha and the sum is
//!   renormalized, so transparent pixels never bleed their meaningless
//!   color into visible ones.
//! - Boundaries clamp to the nearest edge pixel; they never wrap and never
//!   fade to black.
//!
//! ## Image Format
//!
//! Images are `ndarray` arrays of shape `(height, width, channels)`, one
//! byte per channel, row-major and pixel-interleaved:
//! - **3 channels**: fully opaque, gamma-encoded color
//! - **4 channels**: channel 0 is *linear* alpha, channels 1-3 are
//!   gamma-encoded color
//!
//! Decoding, encoding, compositing and geometric transforms are the
//! business of the surrounding library; every operation here is a pure
//! buffer-to-buffer transform that never mutates its input.

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters;

    /// Blur an image with a gamma-correct two-pass Gaussian convolution.
    ///
    /// The image is (height, width, channels) with 3 or 4 channels; channel
    /// 0 is alpha when there are 4.
    #[pyfunction]
    #[pyo3(signature = (image, radius=5.0))]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::blur::blur(image.as_array(), radius)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// Brighten and blur an image, clipping to white.
    ///
    /// A brightness of 1.0 behaves like `blur`.
    #[pyfunction]
    #[pyo3(signature = (image, brightness=1.5, radius=5.0))]
    pub fn glow<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        brightness: f64,
        radius: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::blur::glow(image.as_array(), brightness, radius)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// Build the soft black shadow cast by a 4-channel image's alpha plane.
    #[pyfunction]
    #[pyo3(signature = (image, radius=5.0, darkness=0.75))]
    pub fn drop_shadow<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: f64,
        darkness: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::shadow::make_shadow(image.as_array(), radius, darkness)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// blurkit extension module
    #[pymodule]
    pub fn blurkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(glow, m)?)?;
        m.add_function(wrap_pyfunction!(drop_shadow, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::blurkit;
