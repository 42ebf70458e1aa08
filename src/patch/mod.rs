//! Icon slot geometry and patch extraction.
//!
//! Cards place each icon centered inside a 400x400 slot whose upper-left
//! corner is the anchor position. Extraction crops a fixed square around the
//! slot center; crop pixels outside the card stay transparent, so anchors
//! near (or beyond) the card edge degrade gracefully instead of failing.

use crate::image::{ImageView, OwnedImage, CHANNELS};
use crate::util::{SpotMatchError, SpotMatchResult};

pub mod rotate;

/// Side length of the square slot an icon is centered in.
pub const SLOT_SIZE: i64 = 400;

/// Icon crop radius around the slot center: `ceil(hypot(100, 100))`.
pub const ICON_RADIUS: i64 = 142;

/// Side length of an extracted icon patch.
pub const PATCH_SIZE: usize = (2 * ICON_RADIUS) as usize;

/// Anchor position: the upper-left corner of one icon slot on a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Creates a position from pixel coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the center of this position's slot.
    pub fn slot_center(&self) -> (i64, i64) {
        (self.x + SLOT_SIZE / 2, self.y + SLOT_SIZE / 2)
    }
}

/// Fixed-size square crop of one icon at one unknown rotation.
pub struct IconPatch {
    img: OwnedImage,
}

impl IconPatch {
    /// Wraps an owned image as a patch; the image must be `PATCH_SIZE` square.
    pub fn new(img: OwnedImage) -> SpotMatchResult<Self> {
        if img.width() != PATCH_SIZE || img.height() != PATCH_SIZE {
            return Err(SpotMatchError::InvalidDimensions {
                width: img.width(),
                height: img.height(),
            });
        }
        Ok(Self { img })
    }

    /// Returns a borrowed view of the patch pixels.
    pub fn view(&self) -> ImageView<'_> {
        self.img.view()
    }
}

/// Extracts the icon patch around `pos` from a card image.
///
/// The crop box is centered on the slot center and clipped against the card
/// bounds; anything outside the card is left transparent. A position whose
/// box lies entirely off-card yields a fully transparent patch.
pub fn extract_icon(card: ImageView<'_>, pos: Position) -> IconPatch {
    let mut data = vec![0u8; PATCH_SIZE * PATCH_SIZE * CHANNELS];

    let (cx, cy) = pos.slot_center();
    let left = cx - ICON_RADIUS;
    let top = cy - ICON_RADIUS;
    let card_width = card.width() as i64;
    let card_height = card.height() as i64;

    for patch_y in 0..PATCH_SIZE {
        let src_y = top + patch_y as i64;
        if src_y < 0 || src_y >= card_height {
            continue;
        }
        let src_x0 = left.max(0);
        let src_x1 = (left + PATCH_SIZE as i64).min(card_width);
        if src_x0 >= src_x1 {
            continue;
        }

        let row = card.row(src_y as usize).expect("row within card bounds");
        let src_start = src_x0 as usize * CHANNELS;
        let src_end = src_x1 as usize * CHANNELS;
        let dst_start = (patch_y * PATCH_SIZE + (src_x0 - left) as usize) * CHANNELS;
        let dst_end = dst_start + (src_end - src_start);
        data[dst_start..dst_end].copy_from_slice(&row[src_start..src_end]);
    }

    let img = OwnedImage::new(data, PATCH_SIZE, PATCH_SIZE).expect("patch buffer length is fixed");
    IconPatch { img }
}
