use std::collections::{HashSet, VecDeque};

use crate::env::OccupancyOracle;
use crate::state::ActorId;

use super::{HexCoord, HexDirection};

/// Cells reachable from a start cell, in breadth-first discovery order.
///
/// Produced fresh per query; callers own the result.
pub type ReachableSet = Vec<HexCoord>;

/// Parameters of a breadth-first reachability query.
///
/// ```
/// use battle_core::{ActorId, HexCoord, ReachQuery};
/// use battle_core::env::OpenField;
///
/// let cells = ReachQuery::new(HexCoord::ORIGIN, 1)
///     .excluding(ActorId(0))
///     .run(&OpenField);
/// assert_eq!(cells.len(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachQuery {
    pub start: HexCoord,
    pub max_range: u32,
    /// Actor whose own cell the oracle should not treat as occupied.
    pub excluded: Option<ActorId>,
    /// Whether the start cell itself is part of the result.
    pub include_start: bool,
}

impl ReachQuery {
    pub fn new(start: HexCoord, max_range: u32) -> Self {
        Self {
            start,
            max_range,
            excluded: None,
            include_start: false,
        }
    }

    pub fn excluding(mut self, actor: ActorId) -> Self {
        self.excluded = Some(actor);
        self
    }

    pub fn including_start(mut self, include_start: bool) -> Self {
        self.include_start = include_start;
        self
    }

    /// Expands the query against `oracle`.
    ///
    /// A neighbour is enqueued at most once and only when the oracle reports
    /// it walkable; cells at `max_range` are emitted but not expanded. An
    /// unwalkable start yields an empty set regardless of `include_start`.
    pub fn run<O>(&self, oracle: &O) -> ReachableSet
    where
        O: OccupancyOracle + ?Sized,
    {
        let mut cells = ReachableSet::new();
        if !oracle.is_walkable(self.start, self.excluded) {
            return cells;
        }

        let mut queue = VecDeque::from([(self.start, 0u32)]);
        let mut visited = HashSet::from([self.start]);

        while let Some((cell, distance)) = queue.pop_front() {
            if cell != self.start || self.include_start {
                cells.push(cell);
            }

            if distance >= self.max_range {
                continue;
            }

            for direction in HexDirection::ALL {
                let neighbor = cell.neighbor(direction);
                if !visited.contains(&neighbor) && oracle.is_walkable(neighbor, self.excluded) {
                    visited.insert(neighbor);
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }

        cells
    }
}

/// Breadth-first reachable cells around `start` within `max_range` steps.
///
/// `exclude_start` drops the start cell from the result. Use [`ReachQuery`]
/// when the oracle should ignore a particular actor's occupancy.
pub fn reachable<O>(start: HexCoord, max_range: u32, oracle: &O, exclude_start: bool) -> ReachableSet
where
    O: OccupancyOracle + ?Sized,
{
    ReachQuery::new(start, max_range)
        .including_start(!exclude_start)
        .run(oracle)
}

/// Raw geometric rays from `start`: `depth` cells per direction, in
/// [`HexDirection::ALL`] order, with no walkability filtering or dedup.
///
/// Depths beyond the coordinate range are clamped to `i32::MAX`.
pub fn straight_projection(start: HexCoord, depth: u32) -> Vec<HexCoord> {
    let depth = ray_length(depth);
    HexDirection::ALL
        .into_iter()
        .flat_map(|direction| (1..=depth).map(move |i| start + direction.delta() * i))
        .collect()
}

fn ray_length(depth: u32) -> i32 {
    i32::try_from(depth).unwrap_or(i32::MAX)
}
