//! Dissimilarity scoring between rotation-invariant signatures.

use crate::image::ImageView;
use crate::util::{SpotMatchError, SpotMatchResult};

/// Sums the squared difference of every channel of every pixel.
///
/// Lower is more similar; zero means pixel-identical. The raw sum is not
/// normalized by pixel or channel count, so scores are only meaningful
/// relative to each other. Both images must have identical dimensions.
pub fn sum_squared_diff(a: ImageView<'_>, b: ImageView<'_>) -> SpotMatchResult<u64> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(SpotMatchError::SizeMismatch {
            width_a: a.width(),
            height_a: a.height(),
            width_b: b.width(),
            height_b: b.height(),
        });
    }

    let mut sum = 0u64;
    for y in 0..a.height() {
        let row_a = a.row(y).expect("row within checked bounds");
        let row_b = b.row(y).expect("row within checked bounds");
        for (&va, &vb) in row_a.iter().zip(row_b) {
            let diff = i64::from(va) - i64::from(vb);
            sum += (diff * diff) as u64;
        }
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::sum_squared_diff;
    use crate::image::ImageView;
    use crate::util::SpotMatchError;

    #[test]
    fn identical_views_score_zero() {
        let data = [7u8; 2 * 2 * 4];
        let a = ImageView::from_slice(&data, 2, 2).unwrap();
        let b = ImageView::from_slice(&data, 2, 2).unwrap();
        assert_eq!(sum_squared_diff(a, b).unwrap(), 0);
    }

    #[test]
    fn channel_differences_accumulate() {
        let zeros = [0u8; 4];
        let pixel = [3u8, 0, 4, 0];
        let a = ImageView::from_slice(&zeros, 1, 1).unwrap();
        let b = ImageView::from_slice(&pixel, 1, 1).unwrap();
        assert_eq!(sum_squared_diff(a, b).unwrap(), 9 + 16);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let small = [0u8; 4];
        let large = [0u8; 16];
        let a = ImageView::from_slice(&small, 1, 1).unwrap();
        let b = ImageView::from_slice(&large, 2, 2).unwrap();
        let err = sum_squared_diff(a, b).err().unwrap();
        assert_eq!(
            err,
            SpotMatchError::SizeMismatch {
                width_a: 1,
                height_a: 1,
                width_b: 2,
                height_b: 2,
            }
        );
    }
}
