//! Drop-shadow derivation.
//!
//! The shadow of an image is based only on its alpha channel: the alpha
//! plane is blurred as an opaque grayscale image, and the blurred level
//! becomes the alpha of an all-black result. Offsetting the shadow and
//! compositing the original over it is the caller's business.

use log::debug;
use ndarray::{Array3, ArrayView3};

use super::blur::blur;
use crate::error::Error;

/// Build the soft shadow cast by a 4-channel image.
///
/// # Arguments
/// * `image` - Source image (height, width, 4), channel 0 alpha. Must be
///   semi-transparent, since its alpha channel is what casts the shadow
/// * `radius` - Size of the shadow, in pixels
/// * `darkness` - How dark to make the shadow: 0.0 means none, 1.0 is the
///   darkest
///
/// # Returns
/// An image of the same size holding just the shadow: black color with the
/// alpha following the blurred silhouette
pub fn make_shadow(
    image: ArrayView3<u8>,
    radius: f64,
    darkness: f64,
) -> Result<Array3<u8>, Error> {
    debug!("making a shadow of radius {radius} and darkness {darkness}");

    let (height, width, channels) = image.dim();
    if channels != 4 {
        return Err(Error::UnsupportedChannels {
            got: channels,
            expected: "4",
        });
    }

    // Opaque image where gray = alpha of the original.
    let mut silhouette = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let alpha = image[[y, x, 0]];
            silhouette[[y, x, 0]] = 255;
            silhouette[[y, x, 1]] = alpha;
            silhouette[[y, x, 2]] = alpha;
            silhouette[[y, x, 3]] = alpha;
        }
    }

    let blurred = blur(silhouette.view(), radius)?;

    // Semi-transparent image: the color stays black, the alpha follows the
    // blurred gray level, darkened or lightened by the darkness factor.
    let mut shadow = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let level = (blurred[[y, x, 1]] as f64 * darkness) as i32;
            shadow[[y, x, 0]] = level.clamp(0, 255) as u8;
        }
    }

    Ok(shadow)
}
