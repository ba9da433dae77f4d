//! Console preview of a packed bitmap.
//!
//! Renders the packed bytes the way a page-addressed panel would light
//! them, for a quick visual check before flashing firmware.

use crate::PAGE_HEIGHT;
use crate::pack::PackedBitmap;

/// Render a packed bitmap as text lines, one character per column.
///
/// Yields 8 lines per page, top pixel row (bit 0) first. A set bit shows
/// as a full block, a clear bit as a space. Lines are produced lazily.
pub fn render_lines(packed: &PackedBitmap) -> impl Iterator<Item = String> + '_ {
    packed.pages().iter().flat_map(|page| {
        (0..PAGE_HEIGHT).map(move |bit| {
            page.iter()
                .map(|&byte| if byte & (1 << bit) != 0 { '█' } else { ' ' })
                .collect::<String>()
        })
    })
}
