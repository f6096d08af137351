//! Traits describing read-only battle data.
//!
//! Oracles expose static terrain and per-call occupancy. Grid queries and the
//! path finder only ever see them through these traits, so the owning battle
//! controller decides what "walkable" means at call time.
mod map;

pub use map::{GridDimensions, StaticTile, TerrainKind, TerrainOracle};

use crate::hex::HexCoord;
use crate::state::ActorId;

/// Walkability predicate consulted by reachability and routing.
///
/// Implementations must reflect terrain existence and the occupancy known at
/// call time. `excluded` names an actor whose own cell should not count as
/// occupied (typically the mover itself).
pub trait OccupancyOracle {
    fn is_walkable(&self, cell: HexCoord, excluded: Option<ActorId>) -> bool;
}

impl<F> OccupancyOracle for F
where
    F: Fn(HexCoord, Option<ActorId>) -> bool,
{
    fn is_walkable(&self, cell: HexCoord, excluded: Option<ActorId>) -> bool {
        self(cell, excluded)
    }
}

/// Oracle that treats every cell as walkable.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenField;

impl OccupancyOracle for OpenField {
    fn is_walkable(&self, _cell: HexCoord, _excluded: Option<ActorId>) -> bool {
        true
    }
}
