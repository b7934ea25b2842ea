//! Shared helpers for integration tests.

use std::io::Cursor;

/// Installs a compact tracing subscriber once, honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

/// Synthetic "photograph": smooth gradients plus deterministic per-pixel
/// noise. Lossless formats compress it poorly, JPEG quality levels produce
/// clearly ordered sizes.
pub fn photo_image(width: u32, height: u32) -> image::RgbaImage {
    let mut state: u32 = 0x2545_f491;
    image::ImageBuffer::from_fn(width, height, |x, y| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let noise = ((state >> 24) & 0x1f) as i32 - 16;

        let r = ((x * 255 / width.max(1)) as i32 + noise).clamp(0, 255) as u8;
        let g = ((y * 255 / height.max(1)) as i32 + noise).clamp(0, 255) as u8;
        let b = (((x + y) * 255 / (width + height).max(1)) as i32 - noise).clamp(0, 255) as u8;
        image::Rgba([r, g, b, 255])
    })
}

/// Encodes an image as an in-memory PNG file, standing in for user input.
pub fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    buf.into_inner()
}
