//! Shared image generators for unit tests.

use std::io::Cursor;

/// Single-colour RGBA image.
pub fn solid_image(width: u32, height: u32) -> image::RgbaImage {
    image::ImageBuffer::from_pixel(width, height, image::Rgba([120, 80, 200, 255]))
}

/// Encodes an image as an in-memory PNG file, as a stand-in for user input.
pub fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    buf.into_inner()
}
