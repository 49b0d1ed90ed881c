//! Geometric types shared by the mapper and the pose capability.

use glam::Vec2;

use crate::types::constants::{GROUND_PLANE_TOLERANCE_M, TILT_TOLERANCE_RAD};

/// Sensor pose in the fixed frame.
///
/// The grid update only consumes `(x, y, yaw)`; `z`, `roll` and `pitch` are
/// carried so the ground-plane assumption behind the 2D projection can be
/// checked each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl SensorPose {
    /// Pose lying flat on the ground plane.
    pub fn flat(x: f32, y: f32, yaw: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            roll: 0.0,
            pitch: 0.0,
            yaw,
        }
    }

    /// Planar position in the fixed frame.
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// True when height and tilt are within the ground-plane tolerances.
    /// A pose failing this still drives the grid update, just degraded.
    pub fn is_ground_plane(&self) -> bool {
        self.z.abs() <= GROUND_PLANE_TOLERANCE_M
            && self.roll.abs() <= TILT_TOLERANCE_RAD
            && self.pitch.abs() <= TILT_TOLERANCE_RAD
    }
}
