//! Greedy direction-quantizing route builder.
//!
//! This is deliberately not a shortest-path search. Each iteration clamps the
//! remaining offset to a unit step, resolves the two diagonals that are not hex
//! steps, and nudges around a single blocked cell. Route shapes therefore
//! follow the offset toward the target rather than any cost metric.

use crate::env::OccupancyOracle;
use crate::error::{BattleError, ErrorSeverity};

use super::{HexCoord, HexDirection};

/// Ordered unit moves leading from a start cell to a destination.
pub type RouteSteps = Vec<HexDirection>;

/// Errors surfaced while building a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteError {
    #[error("no route from {start} to {target} within {limit} steps")]
    PathNotFound {
        start: HexCoord,
        target: HexCoord,
        limit: usize,
    },

    #[error("step {step} chosen at {at} is not a hex direction")]
    NonHexStep { at: HexCoord, step: HexCoord },
}

impl BattleError for RouteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PathNotFound { .. } => ErrorSeverity::Recoverable,
            Self::NonHexStep { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PathNotFound { .. } => "ROUTE_PATH_NOT_FOUND",
            Self::NonHexStep { .. } => "ROUTE_NON_HEX_STEP",
        }
    }
}

/// Clamps each component of `offset` to `-1`, `0`, or `1` by sign.
pub fn quantize(offset: HexCoord) -> HexCoord {
    HexCoord::new(offset.q.signum(), offset.r.signum())
}

/// Builds the route from `start` to `target`.
///
/// Per iteration:
/// 1. `step = quantize(target - current)`.
/// 2. If `step` is `(1, 1)` or `(-1, -1)`, keep only the `r` component when
///    `current + (0, step.r)` is walkable, otherwise keep only `q`.
/// 3. If `current + step` is not walkable, try `(0, step.r)` then
///    `(step.q, 0)`; the last walkable candidate wins. When neither is
///    walkable the step is kept as is.
///
/// At most `limit` steps are produced; a route that would need more fails
/// with [`RouteError::PathNotFound`].
pub fn route<O>(
    start: HexCoord,
    target: HexCoord,
    oracle: &O,
    limit: usize,
) -> Result<RouteSteps, RouteError>
where
    O: OccupancyOracle + ?Sized,
{
    let mut remaining = target - start;
    let mut current = start;
    let mut steps = RouteSteps::new();

    while !remaining.is_origin() {
        if steps.len() >= limit {
            return Err(RouteError::PathNotFound {
                start,
                target,
                limit,
            });
        }

        let mut step = quantize(remaining);

        if step.q * step.r == 1 {
            if oracle.is_walkable(current + HexCoord::new(0, step.r), None) {
                step.q = 0;
            } else {
                step.r = 0;
            }
        }

        if !oracle.is_walkable(current + step, None) {
            let alternatives = [HexCoord::new(0, step.r), HexCoord::new(step.q, 0)];
            for alternative in alternatives {
                if alternative.is_origin() {
                    continue;
                }
                if oracle.is_walkable(current + alternative, None) {
                    step = alternative;
                }
            }
        }

        let direction =
            HexDirection::from_delta(step).ok_or(RouteError::NonHexStep { at: current, step })?;
        steps.push(direction);
        remaining -= step;
        current += step;
    }

    Ok(steps)
}

/// Expands route steps into the cells visited after each step.
pub fn route_cells(start: HexCoord, steps: &[HexDirection]) -> Vec<HexCoord> {
    steps
        .iter()
        .scan(start, |current, direction| {
            *current = *current + *direction;
            Some(*current)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::OpenField;
    use crate::state::ActorId;

    use crate::hex::HexDirection::*;

    const LIMIT: usize = 1024;

    fn blocking(cells: &'static [HexCoord]) -> impl Fn(HexCoord, Option<ActorId>) -> bool {
        move |cell: HexCoord, _: Option<ActorId>| !cells.contains(&cell)
    }

    #[test]
    fn quantize_clamps_by_sign() {
        assert_eq!(quantize(HexCoord::new(5, -3)), HexCoord::new(1, -1));
        assert_eq!(quantize(HexCoord::new(0, 9)), HexCoord::new(0, 1));
        assert_eq!(quantize(HexCoord::ORIGIN), HexCoord::ORIGIN);
    }

    #[test]
    fn same_cell_route_is_empty() {
        let start = HexCoord::new(4, -2);
        assert_eq!(route(start, start, &OpenField, LIMIT), Ok(Vec::new()));
        assert_eq!(route(start, start, &OpenField, 0), Ok(Vec::new()));
    }

    #[test]
    fn open_field_routes_land_on_target() {
        let start = HexCoord::new(1, 2);
        for q in -4..=4 {
            for r in -4..=4 {
                let target = HexCoord::new(q, r);
                let steps = route(start, target, &OpenField, LIMIT).unwrap();
                let end = route_cells(start, &steps).last().copied().unwrap_or(start);
                assert_eq!(end, target, "route to {target}");
            }
        }
    }

    #[test]
    fn invalid_diagonal_prefers_the_r_axis() {
        let steps = route(HexCoord::ORIGIN, HexCoord::new(2, 2), &OpenField, LIMIT).unwrap();
        assert_eq!(steps, vec![South, South, SouthEast, SouthEast]);

        let steps = route(HexCoord::ORIGIN, HexCoord::new(-1, -1), &OpenField, LIMIT).unwrap();
        assert_eq!(steps, vec![North, NorthWest]);
    }

    #[test]
    fn invalid_diagonal_falls_back_to_q_axis_when_r_is_blocked() {
        const BLOCKED: &[HexCoord] = &[HexCoord::new(0, 1)];
        let oracle = blocking(BLOCKED);
        let steps = route(HexCoord::ORIGIN, HexCoord::new(2, 2), &oracle, LIMIT).unwrap();
        assert_eq!(steps, vec![SouthEast, South, South, SouthEast]);
    }

    #[test]
    fn blocked_destination_is_not_entered_first() {
        const BLOCKED: &[HexCoord] = &[HexCoord::new(1, -1)];
        let oracle = blocking(BLOCKED);
        let steps = route(HexCoord::ORIGIN, HexCoord::new(1, -1), &oracle, LIMIT).unwrap();

        // Both axis alternatives are open; the q-axis one is evaluated last and wins.
        assert_eq!(steps[0], SouthEast);
        assert_ne!(route_cells(HexCoord::ORIGIN, &steps)[0], HexCoord::new(1, -1));
        assert_eq!(steps, vec![SouthEast, North]);
    }

    #[test]
    fn only_walkable_alternative_is_taken() {
        const BLOCKED: &[HexCoord] = &[HexCoord::new(1, -1), HexCoord::new(1, 0)];
        let oracle = blocking(BLOCKED);
        let steps = route(HexCoord::ORIGIN, HexCoord::new(2, -2), &oracle, LIMIT).unwrap();
        assert_eq!(steps[0], North);
        assert_eq!(
            route_cells(HexCoord::ORIGIN, &steps).last(),
            Some(&HexCoord::new(2, -2))
        );
    }

    #[test]
    fn step_is_kept_when_no_alternative_is_walkable() {
        const BLOCKED: &[HexCoord] = &[HexCoord::new(1, -1), HexCoord::new(0, -1), HexCoord::new(1, 0)];
        let oracle = blocking(BLOCKED);
        let steps = route(HexCoord::ORIGIN, HexCoord::new(1, -1), &oracle, LIMIT).unwrap();
        assert_eq!(steps, vec![NorthEast]);
    }

    #[test]
    fn step_limit_reports_path_not_found() {
        let target = HexCoord::new(10, 0);
        let err = route(HexCoord::ORIGIN, target, &OpenField, 5).unwrap_err();
        assert_eq!(
            err,
            RouteError::PathNotFound {
                start: HexCoord::ORIGIN,
                target,
                limit: 5
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(route(HexCoord::ORIGIN, target, &OpenField, 10).unwrap().len(), 10);
    }

    #[test]
    fn route_cells_accumulates_steps() {
        let cells = route_cells(HexCoord::new(1, 1), &[North, SouthEast, South]);
        assert_eq!(
            cells,
            vec![HexCoord::new(1, 0), HexCoord::new(2, 0), HexCoord::new(2, 1)]
        );
    }
}
