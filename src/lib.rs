//! SpotMatch finds the one icon two illustrated cards share.
//!
//! Icons sit at known anchor slots but at arbitrary, unknown rotations.
//! Instead of searching rotation angles per comparison, each icon patch is
//! averaged over a dense rotation sweep once, and the resulting
//! rotation-invariant signatures are compared pairwise with a summed squared
//! difference; the globally cheapest cross-card pair wins.

pub mod bank;
pub mod image;
pub mod metric;
pub mod patch;
pub mod search;
pub mod util;

pub use bank::{AngleGrid, CardBank, IconSignature, NormalizeConfig};
pub use image::{ImageView, OwnedImage, CHANNELS};
pub use metric::sum_squared_diff;
pub use patch::rotate::rotate_rgba_bilinear;
pub use patch::{extract_icon, IconPatch, Position, ICON_RADIUS, PATCH_SIZE, SLOT_SIZE};
pub use search::{best_match, Match};
pub use util::{SpotMatchError, SpotMatchResult};

#[cfg(feature = "image-io")]
pub use image::io;
