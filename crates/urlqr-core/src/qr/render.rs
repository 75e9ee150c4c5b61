//! QR matrix → black-on-white bitmap → PNG bytes.

use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;

use super::GenerateError;
use crate::config::QrConfig;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Paint each dark module as a `box_size` square, offset by `border` light modules.
pub fn render(code: &QrCode, cfg: &QrConfig) -> Result<GrayImage, GenerateError> {
    cfg.validate()?;
    let modules = code.width() as u32;
    let side = cfg.image_side(modules).ok_or_else(|| cfg.too_large())?;
    let mut img = GrayImage::from_pixel(side, side, LIGHT);

    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] != Color::Dark {
                continue;
            }
            let px = (cfg.border + x) * cfg.box_size;
            let py = (cfg.border + y) * cfg.box_size;
            for dy in 0..cfg.box_size {
                for dx in 0..cfg.box_size {
                    img.put_pixel(px + dx, py + dy, DARK);
                }
            }
        }
    }

    Ok(img)
}

pub fn to_png(img: &GrayImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
