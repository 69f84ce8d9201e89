use std::{
    io::Cursor,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, RgbImage, RgbaImage};
use zune_jpeg::JpegDecoder;

pub const MAX_TEXTURE_WIDTH: u32 = 3840;
pub const MAX_TEXTURE_HEIGHT: u32 = 2160;

pub struct DecodedImage {
    pub path: PathBuf,
    /// `None` when the file could not be read or decoded; drawn as a blank slide.
    pub color_image: Option<egui::ColorImage>,
    pub load_duration: Duration,
}

impl DecodedImage {
    pub fn is_blank(&self) -> bool {
        self.color_image.is_none()
    }
}

pub fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|s| ["jpg", "jpeg", "jfif"].iter().any(|ext| s.eq_ignore_ascii_case(ext)))
}

/// Reads and decodes `path`, preferring zune-jpeg for JPEG files and falling
/// back to the `image` crate for everything else or when zune fails.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;
    if is_jpeg(path) {
        if let Ok(image) = decode_jpeg(&bytes) {
            return Ok(image);
        }
    }
    image::load_from_memory(&bytes).with_context(|| format!("Unable to decode {}", path.display()))
}

fn decode_jpeg(bytes: &[u8]) -> Result<DynamicImage> {
    let mut decoder = JpegDecoder::new(Cursor::new(bytes));
    let pixels = decoder.decode().map_err(|e| anyhow!("{e:?}"))?;
    let info = decoder.info().ok_or_else(|| anyhow!("JPEG header missing"))?;
    RgbImage::from_raw(info.width as u32, info.height as u32, pixels)
        .map(DynamicImage::ImageRgb8)
        .ok_or_else(|| anyhow!("JPEG pixel buffer does not match its dimensions"))
}

/// Largest size with the aspect ratio of `width`x`height` that fits in the bounds.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let ratio = width as f64 / height.max(1) as f64;
    if ratio > max_width as f64 / max_height as f64 {
        (max_width, ((max_width as f64 / ratio) as u32).max(1))
    } else {
        (((max_height as f64 * ratio) as u32).max(1), max_height)
    }
}

/// Shrinks images larger than the texture bounds; smaller images pass through.
pub fn downscale_to_fit(image: DynamicImage, max_width: u32, max_height: u32) -> Result<DynamicImage> {
    let (new_w, new_h) = fit_dimensions(image.width(), image.height(), max_width, max_height);
    if (new_w, new_h) == (image.width(), image.height()) {
        return Ok(image);
    }

    let rgba = image.to_rgba8();
    let src_image = Image::from_vec_u8(rgba.width(), rgba.height(), rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| anyhow!("{e}"))?;
    let mut dst_image = Image::new(new_w, new_h, PixelType::U8x4);
    Resizer::new()
        .resize(&src_image, &mut dst_image, &ResizeOptions::default())
        .map_err(|e| anyhow!("{e}"))?;
    RgbaImage::from_raw(new_w, new_h, dst_image.into_vec())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| anyhow!("Resized buffer does not match {new_w}x{new_h}"))
}

pub fn load_for_display(path: &Path) -> Result<egui::ColorImage> {
    let image = decode_file(path)?;
    let image = downscale_to_fit(image, MAX_TEXTURE_WIDTH, MAX_TEXTURE_HEIGHT)?;
    Ok(to_color_image(&image))
}
