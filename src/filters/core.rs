//! Core utilities shared by the convolution filters:
//! - Gamma lookup table for decoding 8-bit samples to linear light
//! - 1D Gaussian kernel construction

use crate::error::Error;

/// Display gamma assumed for 8-bit color samples. Roughly approximates
/// monitors.
const GAMMA: f64 = 2.2;

// ============================================================================
// Gamma table
// ============================================================================

/// Lookup table mapping 8-bit gamma-encoded samples to linear light.
///
/// Weighted averaging is only meaningful on linear intensities, so every
/// color sample is decoded through this table before accumulation and
/// re-encoded afterwards. The table is built once and read-only afterwards,
/// so one value can serve any number of convolutions.
///
/// Alpha is stored linearly and never goes through the gamma curve; the
/// direct scaling helpers cover it.
#[derive(Debug, Clone)]
pub struct GammaTable {
    to_linear: [f64; 256],
}

impl GammaTable {
    /// Build the decode table, `(i/255)^2.2` for every byte value.
    pub fn new() -> Self {
        let mut to_linear = [0.0f64; 256];
        for (i, entry) in to_linear.iter_mut().enumerate() {
            *entry = (i as f64 / 255.0).powf(GAMMA);
        }
        Self { to_linear }
    }

    /// Convert a gamma-encoded sample to a linear value between 0.0 and 1.0.
    #[inline]
    pub fn to_linear(&self, sample: u8) -> f64 {
        self.to_linear[sample as usize]
    }

    /// Convert a linear value back to a gamma-encoded byte.
    ///
    /// Computed analytically; this runs once per output sample, so it is not
    /// worth a second lookup table. Out-of-range input (over-bright glow
    /// sums) is clamped. Truncating after the 255.9 scale keeps
    /// `encode(to_linear(v)) == v` exact for every byte.
    #[inline]
    pub fn encode(&self, value: f64) -> u8 {
        let encoded = (value.powf(1.0 / GAMMA) * 255.9) as i32;
        encoded.clamp(0, 255) as u8
    }

    /// Convert a linear 0.0-1.0 value to a byte without any gamma
    /// conversion. Used for alpha values.
    #[inline]
    pub fn linear_to_alpha_byte(value: f64) -> u8 {
        ((value * 255.9) as i32).clamp(0, 255) as u8
    }

    /// Convert an alpha byte to a linear 0.0-1.0 value without any gamma
    /// conversion.
    #[inline]
    pub fn alpha_byte_to_linear(sample: u8) -> f64 {
        sample as f64 / 255.0
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Convolution kernels
// ============================================================================

/// A 1D convolution kernel: the horizontal or vertical cross-section of a
/// separable 2D kernel through its center.
///
/// The length is always odd so a well-defined center tap exists; the
/// constructors enforce this, so every `Kernel` value is valid.
#[derive(Debug, Clone)]
pub struct Kernel {
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a Gaussian kernel where `radius` is one standard deviation.
    ///
    /// The kernel extends to 3 sigma on each side, where the tail weight is
    /// negligible, and is normalized to sum to 1.0. Interpreting the radius
    /// as one sigma matches Photoshop. `radius <= 0` yields the single-tap
    /// identity kernel.
    pub fn gaussian(radius: f64) -> Self {
        if radius <= 0.0 {
            return Self { weights: vec![1.0] };
        }

        let sigma = radius;
        let half_size = (radius * 3.0).ceil() as usize;
        let size = half_size * 2 + 1;
        let two_sigma_squared = 2.0 * sigma * sigma;

        // Don't bother dividing by the Gaussian constant, we normalize anyway.
        let mut weights: Vec<f64> = (0..size)
            .map(|i| {
                let distance = i as f64 - half_size as f64;
                (-distance * distance / two_sigma_squared).exp()
            })
            .collect();

        // Normalize so the area is 1.0.
        let total: f64 = weights.iter().sum();
        for weight in weights.iter_mut() {
            *weight /= total;
        }

        Self { weights }
    }

    /// Wrap a caller-supplied weight sequence, for custom filters.
    ///
    /// # Errors
    /// Rejects even-length (and therefore also empty) sequences, which have
    /// no center tap.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, Error> {
        if weights.len() % 2 == 0 {
            return Err(Error::EvenKernel(weights.len()));
        }
        Ok(Self { weights })
    }

    /// Number of taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Taps on each side of the center.
    #[inline]
    pub fn radius(&self) -> usize {
        (self.weights.len() - 1) / 2
    }

    /// The raw weights.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Gamma Tests
    // ========================================================================

    #[test]
    fn test_gamma_round_trip_exact() {
        let gamma = GammaTable::new();
        for v in 0..=255u8 {
            assert_eq!(gamma.encode(gamma.to_linear(v)), v);
        }
    }

    #[test]
    fn test_gamma_table_monotonic() {
        let gamma = GammaTable::new();
        for v in 1..=255u8 {
            assert!(gamma.to_linear(v) > gamma.to_linear(v - 1));
        }
        assert_eq!(gamma.to_linear(0), 0.0);
        assert!((gamma.to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_encode_clamps_out_of_range() {
        let gamma = GammaTable::new();
        assert_eq!(gamma.encode(2.5), 255);
        assert_eq!(gamma.encode(0.0), 0);
    }

    #[test]
    fn test_alpha_conversion_is_linear() {
        assert_eq!(GammaTable::linear_to_alpha_byte(0.0), 0);
        assert_eq!(GammaTable::linear_to_alpha_byte(1.0), 255);
        // Halfway stays halfway, unlike the gamma curve.
        assert_eq!(GammaTable::linear_to_alpha_byte(0.5), 127);
        assert!((GammaTable::alpha_byte_to_linear(255) - 1.0).abs() < 1e-12);
        assert_eq!(GammaTable::alpha_byte_to_linear(0), 0.0);
    }

    // ========================================================================
    // Kernel Tests
    // ========================================================================

    #[test]
    fn test_gaussian_kernel_normalized_and_symmetric() {
        let kernel = Kernel::gaussian(2.5);
        assert_eq!(kernel.len() % 2, 1);

        let sum: f64 = kernel.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);

        for i in 0..kernel.radius() {
            let mirrored = kernel.len() - 1 - i;
            assert_eq!(kernel.weights()[i], kernel.weights()[mirrored]);
        }
    }

    #[test]
    fn test_gaussian_kernel_length_tracks_radius() {
        // 3 sigma on each side: radius 1.0 -> half size 3 -> 7 taps.
        assert_eq!(Kernel::gaussian(1.0).len(), 7);
        assert_eq!(Kernel::gaussian(0.4).len(), 5);
        assert_eq!(Kernel::gaussian(1.0).radius(), 3);
    }

    #[test]
    fn test_gaussian_degenerate_radius_is_identity() {
        assert_eq!(Kernel::gaussian(0.0).weights(), &[1.0]);
        assert_eq!(Kernel::gaussian(-3.0).len(), 1);
    }

    #[test]
    fn test_from_weights_rejects_even_length() {
        assert!(Kernel::from_weights(vec![0.5, 0.5]).is_err());
        assert!(Kernel::from_weights(vec![]).is_err());
        assert!(Kernel::from_weights(vec![0.25, 0.5, 0.25]).is_ok());
    }
}
