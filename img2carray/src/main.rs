//! One-shot image to C array converter for SSD1306-class displays.
//!
//! Takes an image path, binarizes it at the default 128x64 panel size,
//! and prints a console preview followed by the `uint8_t` array literal
//! ready to paste into firmware source.

use tracing_subscriber::EnvFilter;

use oled_bitmap::{ConvertOptions, binarize, format_c_array, pack_pages, render_lines};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        anyhow::bail!("Usage: img2carray <image-path>");
    };

    tracing::info!(path = %path, "Converting image");

    let options = ConvertOptions::default();
    let grid = binarize(&path, &options)?;
    let packed = pack_pages(&grid);

    for line in render_lines(&packed) {
        println!("{line}");
    }
    println!("{}", format_c_array(&packed, &options.array_name, options.line_break));

    Ok(())
}
