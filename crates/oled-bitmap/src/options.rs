//! Conversion configuration options.
//!
//! These options control the target dimensions, thresholding behavior,
//! and the shape of the generated C array literal.

use crate::{ConvertError, Result, SSD1306_HEIGHT, SSD1306_WIDTH};

/// Configuration options for converting an image to a packed display bitmap.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Target width in pixels after resizing.
    pub width: u32,

    /// Target height in pixels after resizing.
    pub height: u32,

    /// Invert the black-and-white image after thresholding.
    pub invert: bool,

    /// Fixed binarization threshold. `None` selects one automatically
    /// with Otsu's method.
    pub threshold: Option<u8>,

    /// Identifier used for the generated C array.
    pub array_name: String,

    /// Number of byte literals per line in the generated C array.
    pub line_break: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: SSD1306_WIDTH,
            height: SSD1306_HEIGHT,
            invert: false,
            threshold: None,
            array_name: "img".to_string(),
            line_break: 16,
        }
    }
}

impl ConvertOptions {
    /// Create options with sensible defaults (128x64, Otsu threshold).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set target width and height in pixels.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: set the invert flag.
    pub fn with_invert(mut self, val: bool) -> Self {
        self.invert = val;
        self
    }

    /// Builder: set a fixed threshold, disabling Otsu selection.
    pub fn with_threshold(mut self, val: u8) -> Self {
        self.threshold = Some(val);
        self
    }

    /// Builder: set the C array identifier.
    pub fn with_array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    /// Builder: set the number of byte literals per line.
    ///
    /// # Panics
    /// Panics if value is zero.
    pub fn with_line_break(mut self, val: usize) -> Self {
        assert!(val >= 1, "Line break must be at least 1, got {val}");
        self.line_break = val;
        self
    }

    /// Check that the target dimensions describe a non-empty image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
