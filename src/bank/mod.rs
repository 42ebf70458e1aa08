//! Per-card icon signature banks.
//!
//! Building a bank extracts and normalizes every anchor position of one card
//! exactly once, so each card pays the rotation sweep a single time no matter
//! how many other cards it is later matched against. The bank is an explicit
//! cache owned by the caller; its entries keep the order positions were
//! supplied in, which is also the tie-break order during matching.

mod angles;

pub use angles::AngleGrid;

use crate::image::{ImageView, OwnedImage};
use crate::patch::rotate::rotate_rgba_bilinear;
use crate::patch::{extract_icon, IconPatch, Position, PATCH_SIZE};
use crate::util::{SpotMatchError, SpotMatchResult};
use tracing::debug;

/// Configuration for building rotation-invariant signatures.
#[derive(Clone, Debug)]
pub struct NormalizeConfig {
    /// Number of rotation samples averaged into each signature.
    ///
    /// A quality/speed knob: fewer samples blur less evenly but never change
    /// which API calls succeed. Must be at least 1.
    pub samples: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { samples: 180 }
    }
}

/// Rotation-invariant representation of one icon patch.
///
/// Formed by compositing the patch rotated through a full sweep of angles,
/// each contributing a small equal share of opacity. Content near the patch
/// center survives sharply; content away from it smears into a ring, so two
/// signatures of the same icon at different rotations compare as similar.
pub struct IconSignature {
    img: OwnedImage,
}

impl IconSignature {
    /// Builds the signature by averaging `patch` over a rotation sweep.
    ///
    /// Each rotated copy has its alpha channel uniformly overridden with
    /// `floor(256 / samples)` (clamped to 255) before being composited over
    /// the accumulator in ascending angle order. The truncation residual of
    /// the per-step alpha share is accepted bias, not an error.
    pub fn build(patch: &IconPatch, cfg: &NormalizeConfig) -> SpotMatchResult<Self> {
        let grid = AngleGrid::sweep(cfg.samples)?;
        let alpha = (256 / grid.len()).min(255) as u8;

        let mut acc = OwnedImage::transparent(PATCH_SIZE, PATCH_SIZE)?;
        for angle in grid.iter() {
            let mut rotated = rotate_rgba_bilinear(patch.view(), angle);
            rotated.set_alpha(alpha);
            acc.composite_over(rotated.view())?;
        }
        Ok(Self { img: acc })
    }

    /// Returns a borrowed view of the signature pixels.
    pub fn view(&self) -> ImageView<'_> {
        self.img.view()
    }
}

/// Extracted and normalized signatures for every anchor position of one card.
pub struct CardBank {
    entries: Vec<(Position, IconSignature)>,
}

impl CardBank {
    /// Builds the bank for one card.
    ///
    /// Rejects an empty position list before touching any pixels. Entries are
    /// stored in the order positions are given.
    pub fn build(
        card: ImageView<'_>,
        positions: &[Position],
        cfg: &NormalizeConfig,
    ) -> SpotMatchResult<Self> {
        if positions.is_empty() {
            return Err(SpotMatchError::EmptyPositions);
        }
        // Validate the sample count before the first extraction.
        AngleGrid::sweep(cfg.samples)?;

        debug!(
            positions = positions.len(),
            samples = cfg.samples,
            "building card bank"
        );

        let mut entries = Vec::with_capacity(positions.len());
        for &pos in positions {
            let patch = extract_icon(card, pos);
            let signature = IconSignature::build(&patch, cfg)?;
            entries.push((pos, signature));
        }
        Ok(Self { entries })
    }

    /// Returns the number of signatures in the bank.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bank holds no signatures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bank entries in position-list order.
    pub fn entries(&self) -> &[(Position, IconSignature)] {
        &self.entries
    }
}
