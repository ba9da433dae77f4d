//! C array rendering of a packed bitmap.
//!
//! Produces a `uint8_t` initializer ready to paste into firmware source,
//! with one brace group per display page.

use crate::pack::PackedBitmap;

/// Render a packed bitmap as a two-dimensional C array literal.
///
/// The array is declared as `uint8_t name[pages][width]`. Each page becomes
/// one brace group of uppercase, zero-padded hex literals, wrapped after
/// `bytes_per_line` entries with a five-space continuation indent. The final
/// brace group carries no trailing comma.
///
/// # Panics
/// Panics if `bytes_per_line` is zero.
pub fn format_c_array(packed: &PackedBitmap, name: &str, bytes_per_line: usize) -> String {
    assert!(
        bytes_per_line >= 1,
        "Bytes per line must be at least 1, got {bytes_per_line}"
    );

    let rows = packed.page_count();
    let cols = if rows > 0 { packed.pages()[0].len() } else { 0 };

    let mut out = format!("uint8_t {name}[{rows}][{cols}] = {{\n");
    for page in packed.pages() {
        out.push_str("    {");
        for (i, chunk) in page.chunks(bytes_per_line).enumerate() {
            if i > 0 {
                out.push_str(",\n     ");
            }
            let literals: Vec<String> = chunk.iter().map(|byte| format!("0x{byte:02X}")).collect();
            out.push_str(&literals.join(", "));
        }
        out.push_str("},\n");
    }

    let mut result = out.trim_end_matches([',', '\n']).to_string();
    result.push_str("\n};");
    result
}
