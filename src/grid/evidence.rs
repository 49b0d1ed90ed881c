use glam::{UVec2, Vec2};

use crate::types::GridInfo;

/// Fixed-frame occupancy evidence store.
///
/// Each cell holds a hit counter, not a probability. Counters start at zero,
/// only ever grow, and the grid is never resized after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceGrid {
    info: GridInfo,
    data: Vec<u32>,
}

impl EvidenceGrid {
    pub fn new(info: GridInfo) -> Self {
        let data = vec![0; info.cells()];
        Self { info, data }
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn get(&self, cell: UVec2) -> Option<u32> {
        if cell.x >= self.info.x_num() || cell.y >= self.info.y_num() {
            return None;
        }
        Some(self.data[self.index(cell)])
    }

    /// Add one evidence count at the cell containing the world point.
    ///
    /// Returns the incremented cell, or `None` if the point falls outside
    /// the grid (the update is discarded, non-fatal).
    pub fn add_hit(&mut self, p: Vec2) -> Option<UVec2> {
        let cell = self.info.world_to_cell(p)?;
        let idx = self.index(cell);
        self.data[idx] += 1;
        Some(cell)
    }

    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.info.x_num() as usize) + (cell.x as usize)
    }

    /// Row-major counters, y-major then x.
    pub fn counts(&self) -> &[u32] {
        &self.data
    }

    pub fn total_evidence(&self) -> u64 {
        self.data.iter().map(|&c| c as u64).sum()
    }

    /// Largest counter in the grid. Zero for a fresh grid.
    pub fn max_evidence(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}
