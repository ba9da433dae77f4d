//! Image conversion library for page-addressed monochrome OLED displays.
//!
//! Provides binarization (Otsu or fixed threshold), packing into the
//! 8-row page layout used by SSD1306-class controllers, and rendering
//! of the packed bytes as a C array literal or a console preview.

use std::path::PathBuf;

pub mod binarize;
pub mod carray;
pub mod options;
pub mod otsu;
pub mod pack;
pub mod preview;
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use binarize::{binarize, binarize_image};
pub use carray::format_c_array;
pub use options::ConvertOptions;
pub use otsu::otsu_threshold;
pub use pack::{PackedBitmap, pack_pages};
pub use preview::render_lines;

/// Default target width in pixels (SSD1306 panels are 128 columns wide).
pub const SSD1306_WIDTH: u32 = 128;

/// Default target height in pixels (the common SSD1306 panel is 64 rows tall).
pub const SSD1306_HEIGHT: u32 = 64;

/// Number of pixel rows packed into one byte per column on page-addressed
/// controllers.
pub const PAGE_HEIGHT: u32 = 8;

/// Errors that can occur during image conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid target dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
