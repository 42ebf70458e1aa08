//! Convenience helpers for loading cards via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{ImageView, OwnedImage, CHANNELS};
use crate::util::{SpotMatchError, SpotMatchResult};
use std::path::Path;

/// Creates an owned image from an RGBA image buffer.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> SpotMatchResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height)
}

/// Creates an owned RGBA image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> SpotMatchResult<OwnedImage> {
    let rgba = img.to_rgba8();
    owned_from_rgba_image(&rgba)
}

/// Loads an image from disk and converts it to an owned RGBA image.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> SpotMatchResult<OwnedImage> {
    let img = image::open(path).map_err(|err| SpotMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Copies a view into an `image::RgbaImage` buffer for encoding.
pub fn rgba_image_from_view(view: ImageView<'_>) -> image::RgbaImage {
    let width = view.width();
    let height = view.height();
    let mut data = Vec::with_capacity(width * height * CHANNELS);
    for y in 0..height {
        let row = view.row(y).expect("row within view bounds");
        data.extend_from_slice(row);
    }
    image::RgbaImage::from_raw(width as u32, height as u32, data)
        .expect("buffer length matches dimensions")
}
