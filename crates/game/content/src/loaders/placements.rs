//! Actor placement loader.
//!
//! A placement file lists where each party member and enemy stands when the
//! battle begins. Party order is the turn order.

use std::path::Path;

use battle_core::{ActorId, HexCoord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacementsRon {
    party: Vec<(u32, i32, i32)>, // (actor, q, r)
    #[serde(default)]
    enemies: Vec<(u32, i32, i32)>,
}

/// Starting cells for both sides of a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placements {
    pub party: Vec<(ActorId, HexCoord)>,
    pub enemies: Vec<(ActorId, HexCoord)>,
}

impl Placements {
    /// Party actors in turn order.
    pub fn roster(&self) -> Vec<ActorId> {
        self.party.iter().map(|(actor, _)| *actor).collect()
    }
}

/// Loader for placement files.
pub struct PlacementLoader;

impl PlacementLoader {
    pub fn load(path: &Path) -> LoadResult<Placements> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Placements> {
        let data: PlacementsRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse placements RON: {}", e))?;

        let convert = |entries: Vec<(u32, i32, i32)>| {
            entries
                .into_iter()
                .map(|(id, q, r)| (ActorId(id), HexCoord::new(q, r)))
                .collect::<Vec<_>>()
        };

        Ok(Placements {
            party: convert(data.party),
            enemies: convert(data.enemies),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_order_becomes_roster() {
        let placements = PlacementLoader::parse(
            "(party: [(3, 0, 0), (1, 1, 0)], enemies: [(10, 4, 4)])",
        )
        .unwrap();

        assert_eq!(placements.roster(), vec![ActorId(3), ActorId(1)]);
        assert_eq!(placements.party[1].1, HexCoord::new(1, 0));
        assert_eq!(placements.enemies, vec![(ActorId(10), HexCoord::new(4, 4))]);
    }

    #[test]
    fn enemies_are_optional() {
        let placements = PlacementLoader::parse("(party: [(1, 2, 2)])").unwrap();
        assert!(placements.enemies.is_empty());
    }
}
