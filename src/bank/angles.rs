//! Angle sweep generation for rotation averaging.

use crate::util::{SpotMatchError, SpotMatchResult};

/// Discrete grid of equally spaced angles covering [0, 360) degrees.
#[derive(Clone, Debug)]
pub struct AngleGrid {
    len: usize,
}

impl AngleGrid {
    /// Creates a full sweep with `samples` equally spaced angles.
    pub fn sweep(samples: usize) -> SpotMatchResult<Self> {
        if samples == 0 {
            return Err(SpotMatchError::InvalidSampleCount);
        }
        Ok(Self { len: samples })
    }

    /// Returns the number of discrete angles in the sweep.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the sweep has no angles.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sweep step size in degrees.
    pub fn step_deg(&self) -> f32 {
        360.0 / self.len as f32
    }

    /// Returns the angle in degrees for the given index.
    pub fn angle_at(&self, idx: usize) -> f32 {
        debug_assert!(idx < self.len);
        idx as f32 * self.step_deg()
    }

    /// Iterates over all angles in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len).map(|idx| self.angle_at(idx))
    }
}
