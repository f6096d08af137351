//! Actor placement on top of static terrain.
//!
//! [`Battlefield`] is the owning battle controller's view of the grid: it
//! answers the core's [`OccupancyOracle`] queries from terrain plus the
//! positions of every actor on both sides.
use std::collections::BTreeMap;
use std::sync::Arc;

use battle_core::{
    ActorId, GridDimensions, HexCoord, OccupancyOracle, TerrainOracle, straight_projection,
};
use serde::{Deserialize, Serialize};

use crate::api::{GridLayout, Result, RuntimeError, WorldPoint};

/// Which side of the battle an actor fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Party,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    side: Side,
    cell: HexCoord,
}

pub struct Battlefield {
    terrain: Arc<dyn TerrainOracle>,
    layout: Arc<dyn GridLayout>,
    placements: BTreeMap<ActorId, Placement>,
}

impl Battlefield {
    pub fn new(terrain: Arc<dyn TerrainOracle>, layout: Arc<dyn GridLayout>) -> Self {
        Self {
            terrain,
            layout,
            placements: BTreeMap::new(),
        }
    }

    /// Puts `actor` on `cell` for the start of the battle.
    ///
    /// Fails when the actor is already placed or the cell is not walkable.
    pub fn place(&mut self, actor: ActorId, side: Side, cell: HexCoord) -> Result<()> {
        if self.placements.contains_key(&actor) {
            return Err(RuntimeError::DuplicateActor(actor));
        }
        if !self.is_walkable(cell, None) {
            return Err(RuntimeError::BlockedPlacement { actor, cell });
        }
        self.placements.insert(actor, Placement { side, cell });
        Ok(())
    }

    /// Updates the logical position of an actor that is already placed.
    pub fn set_position(&mut self, actor: ActorId, cell: HexCoord) -> Result<()> {
        let placement = self
            .placements
            .get_mut(&actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        placement.cell = cell;
        Ok(())
    }

    pub fn position(&self, actor: ActorId) -> Option<HexCoord> {
        self.placements.get(&actor).map(|placement| placement.cell)
    }

    pub fn side(&self, actor: ActorId) -> Option<Side> {
        self.placements.get(&actor).map(|placement| placement.side)
    }

    /// Actor standing on `cell`, if any.
    pub fn occupant(&self, cell: HexCoord) -> Option<ActorId> {
        self.placements
            .iter()
            .find(|(_, placement)| placement.cell == cell)
            .map(|(actor, _)| *actor)
    }

    /// Actors on `side` with their cells, ordered by id.
    pub fn members(&self, side: Side) -> impl Iterator<Item = (ActorId, HexCoord)> + '_ {
        self.placements
            .iter()
            .filter(move |(_, placement)| placement.side == side)
            .map(|(actor, placement)| (*actor, placement.cell))
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.terrain.dimensions()
    }

    pub fn terrain(&self) -> &dyn TerrainOracle {
        self.terrain.as_ref()
    }

    pub fn map_to_world(&self, cell: HexCoord) -> WorldPoint {
        self.layout.map_to_world(cell)
    }

    /// Cell under `point`, or `None` outside the map.
    pub fn world_to_map(&self, point: WorldPoint) -> Option<HexCoord> {
        let cell = self.layout.world_to_map(point);
        self.terrain.contains(cell).then_some(cell)
    }

    /// Straight rays from the actor's cell, clipped to the map bounds.
    ///
    /// Occupancy is not considered; a preview shows line-of-effect only.
    pub fn line_preview(&self, actor: ActorId, depth: u32) -> Result<Vec<HexCoord>> {
        let origin = self
            .position(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        Ok(straight_projection(origin, depth)
            .into_iter()
            .filter(|cell| self.terrain.contains(*cell))
            .collect())
    }
}

impl OccupancyOracle for Battlefield {
    /// Walkable when the terrain is passable and nobody but `excluded` stands there.
    fn is_walkable(&self, cell: HexCoord, excluded: Option<ActorId>) -> bool {
        if !self.terrain.is_passable(cell) {
            return false;
        }
        match self.occupant(cell) {
            Some(actor) => Some(actor) == excluded,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AxialLayout;
    use crate::oracle::HexMapOracle;
    use battle_core::TerrainKind;

    fn field() -> Battlefield {
        let map = HexMapOracle::open(5, 5).with_terrain(HexCoord::new(2, 2), TerrainKind::Wall);
        Battlefield::new(Arc::new(map), Arc::new(AxialLayout::default()))
    }

    #[test]
    fn occupied_cells_are_walkable_only_for_their_occupant() {
        let mut field = field();
        field.place(ActorId(1), Side::Party, HexCoord::new(1, 1)).unwrap();
        field.place(ActorId(9), Side::Enemy, HexCoord::new(3, 3)).unwrap();

        assert!(!field.is_walkable(HexCoord::new(1, 1), None));
        assert!(field.is_walkable(HexCoord::new(1, 1), Some(ActorId(1))));
        assert!(!field.is_walkable(HexCoord::new(1, 1), Some(ActorId(9))));
        assert!(!field.is_walkable(HexCoord::new(3, 3), Some(ActorId(1))));
        assert!(!field.is_walkable(HexCoord::new(2, 2), None));
        assert!(!field.is_walkable(HexCoord::new(7, 0), None));
        assert!(field.is_walkable(HexCoord::new(0, 0), None));
    }

    #[test]
    fn placement_rejects_duplicates_and_blocked_cells() {
        let mut field = field();
        field.place(ActorId(1), Side::Party, HexCoord::new(0, 0)).unwrap();

        assert!(matches!(
            field.place(ActorId(1), Side::Party, HexCoord::new(0, 1)),
            Err(RuntimeError::DuplicateActor(ActorId(1)))
        ));
        assert!(matches!(
            field.place(ActorId(2), Side::Enemy, HexCoord::new(0, 0)),
            Err(RuntimeError::BlockedPlacement { .. })
        ));
        assert!(matches!(
            field.place(ActorId(3), Side::Enemy, HexCoord::new(2, 2)),
            Err(RuntimeError::BlockedPlacement { .. })
        ));
    }

    #[test]
    fn members_are_split_by_side() {
        let mut field = field();
        field.place(ActorId(2), Side::Party, HexCoord::new(0, 1)).unwrap();
        field.place(ActorId(1), Side::Party, HexCoord::new(0, 0)).unwrap();
        field.place(ActorId(5), Side::Enemy, HexCoord::new(4, 4)).unwrap();

        let party: Vec<_> = field.members(Side::Party).map(|(actor, _)| actor).collect();
        assert_eq!(party, vec![ActorId(1), ActorId(2)]);
        assert_eq!(field.members(Side::Enemy).count(), 1);
        assert_eq!(field.side(ActorId(5)), Some(Side::Enemy));
        assert_eq!(field.occupant(HexCoord::new(0, 1)), Some(ActorId(2)));
    }

    #[test]
    fn line_preview_is_clipped_to_the_map() {
        let mut field = field();
        field.place(ActorId(1), Side::Party, HexCoord::new(0, 0)).unwrap();

        let cells = field.line_preview(ActorId(1), 2).unwrap();
        // Only South and SouthEast rays stay on a map anchored at the origin.
        assert_eq!(
            cells,
            vec![
                HexCoord::new(1, 0),
                HexCoord::new(2, 0),
                HexCoord::new(0, 1),
                HexCoord::new(0, 2),
            ]
        );
        assert!(field.line_preview(ActorId(8), 2).is_err());
    }

    #[test]
    fn world_points_resolve_to_cells_inside_the_map() {
        let field = field();
        let point = field.map_to_world(HexCoord::new(3, 1));
        assert_eq!(field.world_to_map(point), Some(HexCoord::new(3, 1)));
        assert_eq!(field.world_to_map(WorldPoint::new(-500.0, -500.0)), None);
    }

    #[test]
    fn unknown_actor_cannot_be_moved() {
        let mut field = field();
        assert!(matches!(
            field.set_position(ActorId(4), HexCoord::ORIGIN),
            Err(RuntimeError::UnknownActor(ActorId(4)))
        ));
    }
}
