//! Grid extent metadata.

use glam::{UVec2, Vec2};

use crate::types::ScanMapError;

/// Fixed-frame extents of the evidence grid.
///
/// Resolutions are derived from min/max/num on demand and never stored, so
/// the three values cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct GridInfo {
    x_min: f32,
    x_max: f32,
    x_num: u32,
    y_min: f32,
    y_max: f32,
    y_num: u32,
}

impl GridInfo {
    pub fn new(
        x_min: f32,
        x_max: f32,
        x_num: u32,
        y_min: f32,
        y_max: f32,
        y_num: u32,
    ) -> Result<Self, ScanMapError> {
        if x_num == 0 || y_num == 0 {
            return Err(ScanMapError::InvalidExtents(format!(
                "cell counts must be positive, got {}x{}",
                x_num, y_num
            )));
        }
        if x_max <= x_min || y_max <= y_min {
            return Err(ScanMapError::InvalidExtents(format!(
                "max must exceed min, got x [{}, {}] y [{}, {}]",
                x_min, x_max, y_min, y_max
            )));
        }

        Ok(Self {
            x_min,
            x_max,
            x_num,
            y_min,
            y_max,
            y_num,
        })
    }

    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    pub fn y_min(&self) -> f32 {
        self.y_min
    }

    pub fn x_num(&self) -> u32 {
        self.x_num
    }

    pub fn y_num(&self) -> u32 {
        self.y_num
    }

    /// Cell width in meters, recomputed from the extents.
    #[inline]
    pub fn x_res(&self) -> f32 {
        (self.x_max - self.x_min) / self.x_num as f32
    }

    /// Cell height in meters, recomputed from the extents.
    #[inline]
    pub fn y_res(&self) -> f32 {
        (self.y_max - self.y_min) / self.y_num as f32
    }

    pub fn cells(&self) -> usize {
        (self.x_num as usize) * (self.y_num as usize)
    }

    /// Cell containing the world point, or `None` outside
    /// `[0, x_num) x [0, y_num)`.
    pub fn world_to_cell(&self, p: Vec2) -> Option<UVec2> {
        let mx = ((p.x - self.x_min) / self.x_res()).floor();
        let my = ((p.y - self.y_min) / self.y_res()).floor();
        if mx < 0.0 || my < 0.0 || mx >= self.x_num as f32 || my >= self.y_num as f32 {
            return None;
        }
        Some(UVec2::new(mx as u32, my as u32))
    }

    /// Center of a cell in world coordinates.
    pub fn cell_center(&self, cell: UVec2) -> Vec2 {
        Vec2::new(
            self.x_min + (cell.x as f32 + 0.5) * self.x_res(),
            self.y_min + (cell.y as f32 + 0.5) * self.y_res(),
        )
    }
}
