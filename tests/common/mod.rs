#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    let pixel = Rgba(color);
    let buffer = RgbaImage::from_pixel(width, height, pixel);
    DynamicImage::ImageRgba8(buffer)
}

pub fn write_image(path: impl Into<PathBuf>, image: &DynamicImage) {
    image
        .save(path.into())
        .expect("failed to write image to disk");
}

/// Creates empty files (and their parent folders) below `root`.
pub fn touch_all(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = root.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, []).unwrap();
            path
        })
        .collect()
}

pub fn fake_paths(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|idx| PathBuf::from(format!("/photos/{idx}.jpg")))
        .collect()
}
