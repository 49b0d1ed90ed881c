//! Projects validated rays through the sensor pose into the evidence grid.

use glam::Vec2;
use log::warn;

use crate::grid::EvidenceGrid;
use crate::types::constants::{GROUND_PLANE_TOLERANCE_M, TILT_TOLERANCE_RAD};
use crate::types::scan::RangeReading;
use crate::types::{GridInfo, SensorPose};

/// Per-cycle summary of one grid update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperUpdate {
    /// Rays whose endpoint landed in the grid and was counted.
    pub hits: usize,
    /// Rays whose endpoint fell outside the grid and was discarded.
    pub out_of_grid: usize,
    /// The pose violated the ground-plane assumption this cycle. The
    /// update still ran, using the pose as-is.
    pub degraded: bool,
}

/// Accumulates ray endpoints into an evidence grid it owns exclusively.
///
/// Evidence is hit-only: cells between the sensor and the endpoint are not
/// cleared or otherwise touched.
pub struct GridMapper {
    grid: EvidenceGrid,
}

impl GridMapper {
    pub fn new(info: GridInfo) -> Self {
        Self {
            grid: EvidenceGrid::new(info),
        }
    }

    /// Read-only view for renderers and tests.
    pub fn grid(&self) -> &EvidenceGrid {
        &self.grid
    }

    /// Project each ray through `pose` and count its endpoint.
    ///
    /// Endpoints outside the grid are discarded per ray; nothing here is
    /// fatal. Prior evidence is never reset or decayed.
    pub fn apply_scan(&mut self, pose: &SensorPose, rays: &[RangeReading]) -> MapperUpdate {
        let mut update = MapperUpdate {
            degraded: !pose.is_ground_plane(),
            ..Default::default()
        };
        if update.degraded {
            if pose.z.abs() > GROUND_PLANE_TOLERANCE_M {
                warn!("sensor is not on the ground plane: z = {:.3} m", pose.z);
            }
            if pose.roll.abs() > TILT_TOLERANCE_RAD || pose.pitch.abs() > TILT_TOLERANCE_RAD {
                warn!(
                    "sensor roll/pitch too large: roll = {:.3}, pitch = {:.3}",
                    pose.roll, pose.pitch
                );
            }
        }

        for reading in rays {
            let angle_frame = reading.angle + pose.yaw;
            let hit =
                pose.xy() + reading.distance * Vec2::new(angle_frame.cos(), angle_frame.sin());
            match self.grid.add_hit(hit) {
                Some(_) => update.hits += 1,
                None => update.out_of_grid += 1,
            }
        }

        update
    }
}
