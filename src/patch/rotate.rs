//! RGBA rotation with bilinear resampling.

use crate::image::{ImageView, OwnedImage, CHANNELS};
use crate::util::math::sin_cos_deg;

/// Rotates an RGBA image about its center using bilinear sampling.
///
/// Rotation is performed about the image center with `cx = (w - 1) / 2` and
/// `cy = (h - 1) / 2` in floating-point coordinates. Each destination pixel
/// center `(x, y)` is mapped to the source coordinate using inverse rotation.
/// Samples outside the source bounds stay fully transparent. Bilinear
/// interpolation clamps indices to the valid image range and each channel is
/// rounded to the nearest integer before clamping to `[0, 255]`.
pub fn rotate_rgba_bilinear(src: ImageView<'_>, angle_deg: f32) -> OwnedImage {
    let width = src.width();
    let height = src.height();
    let mut out = vec![0u8; width * height * CHANNELS];

    let (sin_a, cos_a) = sin_cos_deg(angle_deg);
    let cx = (width as f32 - 1.0) * 0.5;
    let cy = (height as f32 - 1.0) * 0.5;
    let max_x = width as f32 - 1.0;
    let max_y = height as f32 - 1.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let src_x = cos_a * dx + sin_a * dy + cx;
            let src_y = -sin_a * dx + cos_a * dy + cy;

            let epsilon = 1e-6;
            if !src_x.is_finite()
                || !src_y.is_finite()
                || src_x < -epsilon
                || src_y < -epsilon
                || src_x > max_x + epsilon
                || src_y > max_y + epsilon
            {
                continue;
            }

            let src_x = src_x.clamp(0.0, max_x);
            let src_y = src_y.clamp(0.0, max_y);
            let x0 = src_x.floor() as usize;
            let y0 = src_y.floor() as usize;
            let x1 = (x0 + 1).min(width - 1);
            let y1 = (y0 + 1).min(height - 1);
            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            let w00 = (1.0 - fx) * (1.0 - fy);
            let w10 = fx * (1.0 - fy);
            let w01 = (1.0 - fx) * fy;
            let w11 = fx * fy;

            let row0 = src.row(y0).expect("row in bounds");
            let row1 = src.row(y1).expect("row in bounds");
            let dst = &mut out[(y * width + x) * CHANNELS..(y * width + x + 1) * CHANNELS];
            for channel in 0..CHANNELS {
                let a = row0[x0 * CHANNELS + channel] as f32;
                let b = row0[x1 * CHANNELS + channel] as f32;
                let c = row1[x0 * CHANNELS + channel] as f32;
                let d = row1[x1 * CHANNELS + channel] as f32;
                let value = a * w00 + b * w10 + c * w01 + d * w11;
                dst[channel] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    OwnedImage::new(out, width, height).expect("rotation output is contiguous")
}

#[cfg(test)]
mod tests {
    use super::rotate_rgba_bilinear;
    use crate::image::OwnedImage;

    #[test]
    fn quarter_turn_permutes_pixels_exactly() {
        let mut img = OwnedImage::transparent(4, 4).unwrap();
        img.set_pixel(0, 0, [10, 20, 30, 255]);
        img.set_pixel(3, 0, [40, 50, 60, 255]);

        let rotated = rotate_rgba_bilinear(img.view(), 90.0);
        let corners = [
            rotated.pixel(0, 0).unwrap(),
            rotated.pixel(3, 0).unwrap(),
            rotated.pixel(0, 3).unwrap(),
            rotated.pixel(3, 3).unwrap(),
        ];
        let occupied: Vec<_> = corners.iter().filter(|px| px[3] == 255).collect();
        assert_eq!(occupied.len(), 2);
        assert!(corners.contains(&[10, 20, 30, 255]));
        assert!(corners.contains(&[40, 50, 60, 255]));
    }

    #[test]
    fn zero_angle_is_identity() {
        let mut img = OwnedImage::transparent(5, 3).unwrap();
        img.set_pixel(1, 2, [1, 2, 3, 200]);
        img.set_pixel(4, 0, [9, 8, 7, 100]);

        let rotated = rotate_rgba_bilinear(img.view(), 0.0);
        assert_eq!(rotated.data(), img.data());
    }
}
