use super::*;

use image::{DynamicImage, GrayImage, Luma};

fn white_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([255])))
}

#[test]
fn all_white_image_becomes_zeroed_array() {
    let opts = ConvertOptions::new().with_dimensions(2, 8);
    let grid = binarize_image(&white_image(2, 8), &opts).unwrap();
    let packed = pack_pages(&grid);

    let out = format_c_array(&packed, &opts.array_name, opts.line_break);
    assert_eq!(out, "uint8_t img[1][2] = {\n    {0x00, 0x00}\n};");
}

#[test]
fn partial_page_height_flows_through_the_pipeline() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 20, Luma([0])));
    let opts = ConvertOptions::new().with_dimensions(4, 20).with_threshold(128);
    let grid = binarize_image(&img, &opts).unwrap();
    let packed = pack_pages(&grid);

    assert_eq!(packed.page_count(), 3);
    let out = format_c_array(&packed, &opts.array_name, opts.line_break);
    assert!(out.starts_with("uint8_t img[3][4] = {\n"));
    assert!(out.contains("{0x0F, 0x0F, 0x0F, 0x0F}"));
    assert_eq!(render_lines(&packed).count(), 24);
}

#[test]
fn invert_swaps_packed_columns() {
    let mut img = GrayImage::from_pixel(2, 8, Luma([255]));
    for y in 0..8 {
        img.put_pixel(0, y, Luma([0]));
    }
    let img = DynamicImage::ImageLuma8(img);
    let opts = ConvertOptions::new().with_dimensions(2, 8).with_threshold(128);

    let plain = pack_pages(&binarize_image(&img, &opts).unwrap());
    assert_eq!(plain.pages()[0], vec![0xFF, 0x00]);

    let inverted = pack_pages(&binarize_image(&img, &opts.with_invert(true)).unwrap());
    assert_eq!(inverted.pages()[0], vec![0x00, 0xFF]);

    let lines: Vec<String> = render_lines(&inverted).collect();
    assert_eq!(lines[0], " █");
}

#[test]
fn default_options_produce_ssd1306_shape() {
    let mut img = GrayImage::new(256, 256);
    for y in 0..256 {
        for x in 0..256 {
            img.put_pixel(x, y, Luma([((x + y) / 2) as u8]));
        }
    }
    let img = DynamicImage::ImageLuma8(img);
    let grid = binarize_image(&img, &ConvertOptions::default()).unwrap();
    assert_eq!(grid.dimensions(), (SSD1306_WIDTH, SSD1306_HEIGHT));

    let packed = pack_pages(&grid);
    assert_eq!(packed.page_count(), 8);
    assert_eq!(packed.pages()[0].len(), 128);
    assert!(format_c_array(&packed, "img", 16).starts_with("uint8_t img[8][128] = {\n"));
}

#[test]
fn decodes_image_from_disk() {
    let path = std::env::temp_dir().join(format!("oled-bitmap-e2e-{}.png", std::process::id()));
    let mut img = GrayImage::from_pixel(8, 8, Luma([230]));
    for y in 0..8 {
        for x in 0..4 {
            img.put_pixel(x, y, Luma([25]));
        }
    }
    img.save(&path).expect("Failed to write temp PNG");

    let grid = binarize(&path, &ConvertOptions::new().with_dimensions(8, 8)).unwrap();
    std::fs::remove_file(&path).ok();

    // Otsu lands on the dark cluster, so the dark half stays black.
    for y in 0..8 {
        for x in 0..4 {
            assert_eq!(grid.get_pixel(x, y).0[0], 0);
        }
        for x in 4..8 {
            assert_eq!(grid.get_pixel(x, y).0[0], 255);
        }
    }
}
