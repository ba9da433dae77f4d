//! Image loading, resizing, and binarization.
//!
//! Reduces any supported image to a black-and-white grid at the target
//! dimensions, thresholding either at a fixed value or one chosen by
//! Otsu's method.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use tracing::{debug, info};

use crate::otsu::otsu_threshold;
use crate::{ConvertError, ConvertOptions, Result};

/// Load the image at `path` and binarize it according to `options`.
///
/// The decoded image is dropped as soon as the black-and-white grid has
/// been extracted.
pub fn binarize(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| ConvertError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded source image"
    );
    binarize_image(&img, options)
}

/// Binarize an already decoded image according to `options`.
///
/// The image is converted to grayscale, resized to the target dimensions
/// with bilinear filtering, and thresholded: pixels strictly above the
/// threshold become white (255), the rest black (0). Pixels equal to the
/// threshold always land in the black class. With `options.invert` set,
/// the two classes are swapped afterwards.
pub fn binarize_image(img: &DynamicImage, options: &ConvertOptions) -> Result<GrayImage> {
    options.validate()?;

    let gray = img.to_luma8();
    let gray = if gray.dimensions() == (options.width, options.height) {
        debug!("Image already at target dimensions, skipping resize");
        gray
    } else {
        debug!(
            width = options.width,
            height = options.height,
            "Resizing image to target dimensions"
        );
        imageops::resize(&gray, options.width, options.height, FilterType::Triangle)
    };

    let threshold = match options.threshold {
        Some(t) => {
            info!(threshold = t, "Using fixed threshold");
            t
        }
        None => {
            let t = otsu_threshold(&gray);
            info!(threshold = t, "Selected threshold with Otsu's method");
            t
        }
    };

    let (width, height) = gray.dimensions();
    let mut binary = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = gray.get_pixel(x, y).0[0];
            let new_val = if val > threshold { 255 } else { 0 };
            binary.put_pixel(x, y, Luma([new_val]));
        }
    }

    if options.invert {
        imageops::invert(&mut binary);
    }

    Ok(binary)
}
