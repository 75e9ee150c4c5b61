//! Reads generated PNGs back and decodes their QR payload.

use std::path::Path;

/// Decode the single QR code in the PNG at `path`.
pub fn decode_png(path: &Path) -> String {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("open {}: {}", path.display(), e))
        .to_luma8();
    let (w, h) = img.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
        img.get_pixel(x as u32, y as u32)[0]
    });
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code in {}", path.display());
    let (_meta, content) = grids[0].decode().expect("decode QR grid");
    content
}
