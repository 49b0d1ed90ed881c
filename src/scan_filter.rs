//! Range filtering: interior masking for the reactive controller and
//! per-ray validation for the grid update.
//!
//! The two outputs serve different consumers. The masked array keeps only a
//! peripheral wedge of trusted rays and feeds the obstacle test; the
//! validated ray set keeps every in-range reading (minus stochastic
//! down-sampling) and feeds the mapper.

use log::trace;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::constants::{OBSTACLE_NEAR_M, REPUBLISH_RANGE_MAX_M, SCAN_EDGE_KEEP};
use crate::types::scan::{FilteredScan, LaserScan, RangeReading, SkipReason};

/// Zero every ray in `[SCAN_EDGE_KEEP, len - SCAN_EDGE_KEEP)`, keeping the
/// first and last `SCAN_EDGE_KEEP` rays unchanged. Scans too short to have
/// an interior come back unmodified.
pub fn mask_interior(ranges: &[f32]) -> Vec<f32> {
    let maxi = ranges.len().saturating_sub(SCAN_EDGE_KEEP);
    ranges
        .iter()
        .enumerate()
        .map(|(idx, &r)| {
            if idx >= SCAN_EDGE_KEEP && idx < maxi {
                0.0
            } else {
                r
            }
        })
        .collect()
}

/// Build the scan to republish: masked ranges, `range_max` clamped to the
/// near field.
pub fn republish(scan: &LaserScan) -> FilteredScan {
    FilteredScan {
        ranges: mask_interior(&scan.ranges),
        angle_min: scan.angle_min,
        angle_increment: scan.angle_increment,
        range_min: scan.range_min,
        range_max: REPUBLISH_RANGE_MAX_M,
    }
}

/// Obstacle test over a masked array: true iff some reading is strictly
/// inside `(0, OBSTACLE_NEAR_M)`. Zeros (masked or literal) and NaN never
/// count.
pub fn obstacle_ahead(masked: &[f32]) -> bool {
    masked.iter().any(|&r| r > 0.0 && r < OBSTACLE_NEAR_M)
}

/// Stateful per-ray validator holding the down-sampling random source.
pub struct RangeFilter<R = SmallRng> {
    keep_fraction: f32,
    rng: R,
}

impl RangeFilter<SmallRng> {
    /// Filter with an entropy-seeded generator. `keep_fraction` is the
    /// probability that a ray survives down-sampling.
    pub fn new(keep_fraction: f32) -> Self {
        Self::with_rng(keep_fraction, SmallRng::from_entropy())
    }
}

impl<R: Rng> RangeFilter<R> {
    /// Filter with an injected generator, for deterministic tests.
    pub fn with_rng(keep_fraction: f32, rng: R) -> Self {
        Self { keep_fraction, rng }
    }

    /// Validate every raw ray for grid-update processing.
    ///
    /// A ray is dropped by the down-sampling draw or if its distance is NaN
    /// or outside `[range_min, range_max]`. Each skip is decided
    /// independently and logged; a skip never aborts the scan.
    pub fn grid_rays(&mut self, scan: &LaserScan) -> Vec<RangeReading> {
        let mut rays = Vec::with_capacity(scan.ranges.len());
        for (idx, &r) in scan.ranges.iter().enumerate() {
            match self.validate(r, scan) {
                Ok(()) => rays.push(RangeReading {
                    angle: scan.angle_of(idx),
                    distance: r,
                }),
                Err(reason) => {
                    trace!("ray {} ({} m) skipped: {:?}", idx, r, reason);
                }
            }
        }
        rays
    }

    fn validate(&mut self, r: f32, scan: &LaserScan) -> Result<(), SkipReason> {
        // One draw per ray, taken first so the generator stream advances
        // identically regardless of ray validity.
        if self.rng.gen::<f32>() > self.keep_fraction {
            return Err(SkipReason::Downsampled);
        }
        if r.is_nan() {
            return Err(SkipReason::NotANumber);
        }
        if r > scan.range_max {
            return Err(SkipReason::TooFar);
        }
        if r < scan.range_min {
            return Err(SkipReason::TooClose);
        }
        Ok(())
    }
}
