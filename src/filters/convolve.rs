//! Gamma-aware, alpha-weighted separable convolution.
//!
//! The convolver applies a 1D kernel along the row axis and writes the
//! result transposed, so applying it twice yields a full 2D convolution in
//! the original orientation while each pass only ever walks memory along
//! one axis.
//!
//! ## Alpha Handling
//!
//! Color samples are weighted by their alpha before accumulation, and the
//! sum is renormalized by the total weight actually present in the window.
//! Without this, blurring a semi-transparent edge would mix the meaningless
//! color of transparent pixels into the visible edge, producing dark halos.
//! With it, the result is an average of only the visible neighboring color.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use super::core::{GammaTable, Kernel};
use crate::error::Error;

/// A separable convolution bound to a kernel and a brightness factor.
///
/// `brightness` scales color channels after renormalization: 1.0 is a pure
/// blur, larger values brighten and clip at the channel maximum, which is
/// the glow effect. Alpha is never brightness-scaled.
///
/// The op owns its gamma table and holds no other state, so one value can
/// filter any number of images.
#[derive(Debug, Clone)]
pub struct ConvolveOp {
    kernel: Kernel,
    brightness: f64,
    gamma: GammaTable,
}

impl ConvolveOp {
    /// A pure blur op for the given kernel.
    pub fn new(kernel: Kernel) -> Self {
        Self::with_brightness(kernel, 1.0)
    }

    /// An op that also scales color by `brightness`.
    pub fn with_brightness(kernel: Kernel, brightness: f64) -> Self {
        Self {
            kernel,
            brightness,
            gamma: GammaTable::new(),
        }
    }

    /// Convolve the kernel with the image along both axes.
    ///
    /// Applies the kernel twice, once in each direction; each pass both
    /// convolves horizontally and transposes, so the result comes back in
    /// the source's own dimensions and orientation.
    ///
    /// # Arguments
    /// * `src` - Image with 3 or 4 channels (height, width, channels);
    ///   channel 0 is alpha when there are 4 channels
    ///
    /// # Errors
    /// Rejects channel counts other than 3 or 4, and reports destination
    /// allocation failure.
    pub fn apply(&self, src: ArrayView3<u8>) -> Result<Array3<u8>, Error> {
        let transposed = self.convolve_transposed(src)?;
        self.convolve_transposed(transposed.view())
    }

    /// Convolve horizontally and transpose the output image.
    pub(crate) fn convolve_transposed(
        &self,
        src: ArrayView3<u8>,
    ) -> Result<Array3<u8>, Error> {
        let (height, width, channels) = src.dim();
        if channels != 3 && channels != 4 {
            return Err(Error::UnsupportedChannels {
                got: channels,
                expected: "3 or 4",
            });
        }
        if height == 0 || width == 0 {
            return Ok(Array3::zeros((width, height, channels)));
        }

        let weights = self.kernel.weights();
        let filter_radius = self.kernel.radius() as isize;

        let dest_len = width * height * channels;
        let mut dest = Vec::new();
        dest.try_reserve_exact(dest_len)
            .map_err(|_| Error::Allocation(dest_len))?;
        dest.resize(dest_len, 0u8);

        // Row x of the destination is column x of the source; rows are
        // disjoint, so each is an independent work item.
        let dest_stride = height * channels;
        dest.par_chunks_mut(dest_stride)
            .enumerate()
            .for_each(|(x, dest_row)| {
                for y in 0..height {
                    for b in 0..channels {
                        let is_alpha = channels == 4 && b == 0;

                        let mut sum = 0.0f64;
                        let mut total_weight = 0.0f64;
                        for (i, &weight) in weights.iter().enumerate() {
                            // Treat off-image pixels as their closest pixel
                            // in the image.
                            let sx = (x as isize - filter_radius + i as isize)
                                .clamp(0, width as isize - 1)
                                as usize;

                            let sample = src[[y, sx, b]];
                            if is_alpha {
                                // Alpha is already linear; blur it directly.
                                sum += sample as f64 * weight;
                            } else {
                                let alpha_weight = if channels == 4 {
                                    src[[y, sx, 0]] as f64
                                } else {
                                    255.0
                                };
                                let tap = alpha_weight * weight;
                                sum += self.gamma.to_linear(sample) * tap;
                                total_weight += tap;
                            }
                        }

                        let value = if is_alpha {
                            sum.round().clamp(0.0, 255.0) as u8
                        } else {
                            // Renormalize by the alpha weight actually seen
                            // in the window; a fully transparent window
                            // keeps the raw zero sum.
                            if total_weight != 0.0 {
                                sum *= self.brightness / total_weight;
                            }
                            self.gamma.encode(sum)
                        };

                        dest_row[y * channels + b] = value;
                    }
                }
            });

        Ok(Array3::from_shape_vec((width, height, channels), dest)
            .expect("destination shape mismatch"))
    }
}
