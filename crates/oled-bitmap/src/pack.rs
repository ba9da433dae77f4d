//! Packing of a black-and-white grid into display pages.
//!
//! Page-addressed controllers such as the SSD1306 store one byte per
//! column per page, where a page covers 8 consecutive pixel rows and
//! bit N of each byte addresses row N within the page.

use image::GrayImage;
use tracing::debug;

use crate::PAGE_HEIGHT;

/// A bitmap packed into the page layout of an SSD1306-class controller.
///
/// Produced by [`pack_pages`]; the outer index selects the page (a band
/// of 8 pixel rows) and the inner index the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    pages: Vec<Vec<u8>>,
}

impl PackedBitmap {
    /// Pixel width of the source grid, which is also the bytes per page.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the source grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The packed pages, one byte vector per page.
    pub fn pages(&self) -> &[Vec<u8>] {
        &self.pages
    }
}

/// Pack a black-and-white grid into display pages.
///
/// Bit N of the byte for column `x` in page `p` is set when the pixel at
/// `(x, p * 8 + N)` is black (0), so a set bit corresponds to a lit
/// segment on the panel. Rows past the image height in the final partial
/// page stay 0.
pub fn pack_pages(grid: &GrayImage) -> PackedBitmap {
    let (width, height) = grid.dimensions();

    let mut pages = Vec::with_capacity(height.div_ceil(PAGE_HEIGHT) as usize);
    for page_start in (0..height).step_by(PAGE_HEIGHT as usize) {
        let rows_in_page = PAGE_HEIGHT.min(height - page_start);
        let mut page = Vec::with_capacity(width as usize);
        for col in 0..width {
            let mut byte = 0u8;
            for row in 0..rows_in_page {
                if grid.get_pixel(col, page_start + row).0[0] == 0 {
                    byte |= 1 << row;
                }
            }
            page.push(byte);
        }
        pages.push(page);
    }

    debug!(
        width,
        height,
        pages = pages.len(),
        "Packed grid into display pages"
    );

    PackedBitmap {
        width,
        height,
        pages,
    }
}
