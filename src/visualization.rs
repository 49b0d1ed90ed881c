use glam::{UVec2, Vec2};
use image::{GrayImage, Luma};

use crate::grid::EvidenceGrid;

/// One colored point record per evidenced cell, for an external renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMarker {
    /// Cell center in fixed-frame coordinates (meters).
    pub center: Vec2,
    pub evidence: u32,
    /// RGBA in [0, 1], scaled by relative evidence.
    pub color: [f32; 4],
}

/// Markers for every cell with evidence, in row-major order.
///
/// Color runs blue (single hit) to red (the grid's current maximum); the
/// exact mapping is a preview convenience, renderers are free to restyle.
pub fn evidence_markers(grid: &EvidenceGrid) -> Vec<CellMarker> {
    let info = grid.info();
    let max = grid.max_evidence().max(1) as f32;

    let mut markers = Vec::new();
    for y in 0..info.y_num() {
        for x in 0..info.x_num() {
            let cell = UVec2::new(x, y);
            let evidence = grid.get(cell).unwrap_or(0);
            if evidence == 0 {
                continue;
            }
            let t = evidence as f32 / max;
            markers.push(CellMarker {
                center: info.cell_center(cell),
                evidence,
                color: [t, 0.0, 1.0 - t, 1.0],
            });
        }
    }
    markers
}

/// Grayscale preview of the evidence grid.
///
/// Zero evidence is white-ish, the current maximum is black. The grid's
/// `y = 0` row is written to the bottom of the image to match the usual
/// map-image convention.
pub fn evidence_to_image(grid: &EvidenceGrid) -> GrayImage {
    let info = grid.info();
    let (width, height) = (info.x_num(), info.y_num());
    let max = grid.max_evidence().max(1);
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        let y_grid = height - 1 - y_img;
        for x in 0..width {
            let evidence = grid.get(UVec2::new(x, y_grid)).unwrap_or(0);
            let px = evidence_to_gray(evidence, max);
            img.put_pixel(x, y_img, Luma([px]));
        }
    }

    img
}

fn evidence_to_gray(evidence: u32, max: u32) -> u8 {
    // 0 hits -> 254, max hits -> 0.
    let scaled = (evidence as u64 * 254) / (max as u64);
    (254 - scaled.min(254)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridInfo;

    fn grid_with_hits() -> EvidenceGrid {
        let mut grid = EvidenceGrid::new(GridInfo::new(0.0, 2.0, 2, 0.0, 2.0, 2).unwrap());
        grid.add_hit(Vec2::new(0.5, 0.5));
        grid.add_hit(Vec2::new(1.5, 1.5));
        grid.add_hit(Vec2::new(1.5, 1.5));
        grid
    }

    #[test]
    fn markers_cover_exactly_the_evidenced_cells() {
        let markers = evidence_markers(&grid_with_hits());
        assert_eq!(markers.len(), 2);

        assert_eq!(markers[0].center, Vec2::new(0.5, 0.5));
        assert_eq!(markers[0].evidence, 1);
        assert_eq!(markers[1].center, Vec2::new(1.5, 1.5));
        assert_eq!(markers[1].evidence, 2);

        // The strongest cell is fully red, the weakest still visible.
        assert_eq!(markers[1].color, [1.0, 0.0, 0.0, 1.0]);
        assert!(markers[0].color[2] > 0.0);
    }

    #[test]
    fn empty_grid_has_no_markers() {
        let grid = EvidenceGrid::new(GridInfo::new(0.0, 2.0, 2, 0.0, 2.0, 2).unwrap());
        assert!(evidence_markers(&grid).is_empty());
    }

    #[test]
    fn image_maps_evidence_and_flips_y() {
        let grid = grid_with_hits();
        let img = evidence_to_image(&grid);
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);

        // Grid cell (1, 1) holds the max and lands at image (1, 0).
        assert_eq!(img.get_pixel(1, 0).0[0], 0);
        // Empty cell (1, 0) lands at image (1, 1) and stays bright.
        assert_eq!(img.get_pixel(1, 1).0[0], 254);
        // Cell (0, 0) has half the max evidence: mid-gray, darker than empty.
        let half = img.get_pixel(0, 1).0[0];
        assert!(half > 0 && half < 254);
    }
}
