//! Move sub-phase of a turn.
//!
//! [`MovementCoordinator`] computes the destinations an actor may pick,
//! validates a pick, asks the path finder for a route and walks it one step
//! at a time. Each step awaits the [`PlacementAnimator`] before the logical
//! position advances, so steps are strictly sequential.
use std::sync::Arc;

use battle_core::{
    ActorId, BattleConfig, BattleError, HexCoord, ReachQuery, ReachableSet, RouteSteps,
    TurnNotice, TurnPhase, TurnSequencer, route,
};
use tracing::{debug, info, warn};

use crate::api::{MoveError, PlacementAnimator};
use crate::battlefield::Battlefield;
use crate::events::{EventBus, MovementEvent};

/// Destinations offered to one actor for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSelection {
    pub actor: ActorId,
    pub origin: HexCoord,
    pub destinations: ReachableSet,
}

impl MoveSelection {
    pub fn contains(&self, cell: HexCoord) -> bool {
        self.destinations.contains(&cell)
    }
}

/// Outcome of a completed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub actor: ActorId,
    pub from: HexCoord,
    pub to: HexCoord,
    pub steps: RouteSteps,
    /// Turn notices raised while moving, ending with the next turn's start.
    pub notices: Vec<TurnNotice>,
}

pub struct MovementCoordinator {
    config: BattleConfig,
    animator: Arc<dyn PlacementAnimator>,
    events: EventBus,
    selection: Option<MoveSelection>,
}

impl MovementCoordinator {
    pub fn new(config: BattleConfig, animator: Arc<dyn PlacementAnimator>, events: EventBus) -> Self {
        Self {
            config,
            animator,
            events,
            selection: None,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<&MoveSelection> {
        self.selection.as_ref()
    }

    /// Stored destinations, empty when no selection is active.
    pub fn destinations(&self) -> &[HexCoord] {
        self.selection
            .as_ref()
            .map(|selection| selection.destinations.as_slice())
            .unwrap_or_default()
    }

    /// Computes and stores the cells `actor` can reach this turn.
    ///
    /// The actor's own cell does not block the search and is not offered.
    /// Any previous selection is replaced.
    pub fn begin_move_selection(
        &mut self,
        field: &Battlefield,
        actor: ActorId,
    ) -> Result<&MoveSelection, MoveError> {
        let origin = field
            .position(actor)
            .ok_or(MoveError::UnknownActor { actor })?;

        let destinations = ReachQuery::new(origin, self.config.move_range)
            .excluding(actor)
            .run(field);
        debug!(%actor, %origin, count = destinations.len(), "move selection started");

        self.events.publish_movement(MovementEvent::SelectionStarted {
            actor,
            destinations: destinations.clone(),
        });

        Ok(self.selection.insert(MoveSelection {
            actor,
            origin,
            destinations,
        }))
    }

    /// Membership test against the stored selection.
    pub fn is_valid_destination(&self, cell: HexCoord) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains(cell))
    }

    /// Drops the stored selection. The turn phase is left alone.
    pub fn cancel_move_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            debug!(actor = %selection.actor, "move selection cleared");
            self.events.publish_movement(MovementEvent::SelectionCleared {
                actor: selection.actor,
            });
        }
    }

    /// Walks `actor` to `destination` and ends its turn.
    ///
    /// The destination must be in the stored selection for `actor`, or be
    /// the actor's own cell (a stay move). Rejections leave the battlefield,
    /// the selection, and the sequencer untouched.
    pub async fn execute_move(
        &mut self,
        field: &mut Battlefield,
        turns: &mut TurnSequencer,
        actor: ActorId,
        destination: HexCoord,
    ) -> Result<MoveReport, MoveError> {
        let from = match self.plan(field, turns, actor, destination) {
            Ok(from) => from,
            Err(err) => return Err(self.reject(actor, destination, err)),
        };

        let steps = match route(from, destination, &*field, self.config.max_route_steps) {
            Ok(steps) => steps,
            Err(err) => return Err(self.reject(actor, destination, err.into())),
        };

        self.cancel_move_selection();

        let mut notices: Vec<TurnNotice> = turns.set_phase(TurnPhase::PlayerMoving)?.to_vec();
        self.events.publish_turn_notices(&notices);

        let duration = self.config.step_duration();
        let mut current = from;
        for (index, direction) in steps.iter().enumerate() {
            current = current + *direction;
            self.animator
                .place(actor, field.map_to_world(current), duration)
                .await?;
            field
                .set_position(actor, current)
                .map_err(|_| MoveError::UnknownActor { actor })?;

            debug!(%actor, step = index + 1, position = %current, "step completed");
            self.events.publish_movement(MovementEvent::StepCompleted {
                actor,
                position: current,
                step: index + 1,
            });
        }

        field
            .set_position(actor, destination)
            .map_err(|_| MoveError::UnknownActor { actor })?;

        info!(%actor, %from, to = %destination, steps = steps.len(), "move completed");
        self.events.publish_movement(MovementEvent::MoveCompleted {
            actor,
            from,
            to: destination,
            steps: steps.len(),
        });

        let ended = turns.end_turn()?;
        self.events.publish_turn_notices(&ended);
        notices.extend(ended);

        Ok(MoveReport {
            actor,
            from,
            to: destination,
            steps,
            notices,
        })
    }

    /// Validates a move request and returns the actor's current cell.
    fn plan(
        &self,
        field: &Battlefield,
        turns: &TurnSequencer,
        actor: ActorId,
        destination: HexCoord,
    ) -> Result<HexCoord, MoveError> {
        if !turns.is_active(actor) {
            return Err(MoveError::NotActorsTurn {
                actor,
                active: turns.active_actor(),
            });
        }
        if turns.phase() != TurnPhase::PlayerTurnReady {
            return Err(MoveError::InvalidPhase {
                phase: turns.phase(),
            });
        }

        let from = field
            .position(actor)
            .ok_or(MoveError::UnknownActor { actor })?;

        let selected = self
            .selection
            .as_ref()
            .is_some_and(|selection| selection.actor == actor && selection.contains(destination));
        if destination != from && !selected {
            return Err(MoveError::InvalidDestination { actor, destination });
        }

        Ok(from)
    }

    fn reject(&self, actor: ActorId, destination: HexCoord, err: MoveError) -> MoveError {
        warn!(
            %actor,
            %destination,
            code = err.error_code(),
            severity = %err.severity(),
            "move rejected: {err}"
        );
        self.events.publish_movement(MovementEvent::MoveRejected {
            actor,
            destination,
            reason: err.to_string(),
        });
        err
    }
}
