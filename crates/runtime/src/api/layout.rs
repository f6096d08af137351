//! Conversion between hex cells and presentation-space positions.
use battle_core::HexCoord;
use serde::{Deserialize, Serialize};

/// Position in presentation (world) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Map-to-world and world-to-map service used by movement and input handling.
pub trait GridLayout: Send + Sync {
    /// Centre of `cell` in world space.
    fn map_to_world(&self, cell: HexCoord) -> WorldPoint;

    /// Cell whose hexagon contains `point`.
    fn world_to_map(&self, point: WorldPoint) -> HexCoord;
}

const SQRT_3: f32 = 1.732_050_8;

/// Flat-top axial layout: `r` grows straight down the screen and `q` steps
/// down-right, so [`battle_core::HexDirection::North`] points up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxialLayout {
    /// Distance from a hexagon's centre to any of its corners.
    pub size: f32,
    /// World position of cell `(0, 0)`.
    pub origin: WorldPoint,
}

impl AxialLayout {
    pub const fn new(size: f32, origin: WorldPoint) -> Self {
        Self { size, origin }
    }
}

impl Default for AxialLayout {
    fn default() -> Self {
        Self::new(32.0, WorldPoint::default())
    }
}

impl GridLayout for AxialLayout {
    fn map_to_world(&self, cell: HexCoord) -> WorldPoint {
        let q = cell.q as f32;
        let r = cell.r as f32;
        WorldPoint::new(
            self.origin.x + self.size * 1.5 * q,
            self.origin.y + self.size * (SQRT_3 / 2.0 * q + SQRT_3 * r),
        )
    }

    fn world_to_map(&self, point: WorldPoint) -> HexCoord {
        let x = (point.x - self.origin.x) / self.size;
        let y = (point.y - self.origin.y) / self.size;
        let q = 2.0 / 3.0 * x;
        let r = -1.0 / 3.0 * x + SQRT_3 / 3.0 * y;
        cube_round(q, r)
    }
}

fn cube_round(q: f32, r: f32) -> HexCoord {
    let s = -q - r;
    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
    let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }

    HexCoord::new(rq as i32, rr as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::HexDirection;

    #[test]
    fn cell_centres_map_back_to_their_cell() {
        let layout = AxialLayout::new(20.0, WorldPoint::new(100.0, -40.0));
        for q in -5..=5 {
            for r in -5..=5 {
                let cell = HexCoord::new(q, r);
                assert_eq!(layout.world_to_map(layout.map_to_world(cell)), cell);
            }
        }
    }

    #[test]
    fn points_near_a_centre_resolve_to_that_cell() {
        let layout = AxialLayout::default();
        let centre = layout.map_to_world(HexCoord::new(2, 1));
        let nudged = WorldPoint::new(centre.x + 5.0, centre.y - 7.0);
        assert_eq!(layout.world_to_map(nudged), HexCoord::new(2, 1));
    }

    #[test]
    fn north_points_up_and_south_points_down() {
        let layout = AxialLayout::default();
        let origin = layout.map_to_world(HexCoord::ORIGIN);
        let north = layout.map_to_world(HexDirection::North.delta());
        let south = layout.map_to_world(HexDirection::South.delta());

        assert_eq!(north.x, origin.x);
        assert!(north.y < origin.y);
        assert!(south.y > origin.y);
    }
}
