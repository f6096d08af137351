//! High-level battle orchestrator.
//!
//! A [`BattleSession`] owns the battlefield, the turn sequencer, and the
//! movement coordinator. It translates [`BattleInput`] into coordinator calls,
//! accepts input only while the active actor is ready, and opens move
//! selection for every actor whose turn starts.
use std::sync::Arc;

use battle_content::Placements;
use battle_core::{
    ActorId, BattleConfig, BattleError, HexCoord, TerrainOracle, TurnNotice, TurnPhase,
    TurnSequencer,
};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::api::{
    AxialLayout, GridLayout, InstantAnimator, MoveError, PlacementAnimator, Result, RuntimeError,
    WorldPoint,
};
use crate::battlefield::{Battlefield, Side};
use crate::events::{Event, EventBus, Topic};
use crate::movement::{MoveReport, MovementCoordinator};

/// Runtime configuration shared across the session and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Player intent already translated from raw clicks or keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BattleInput {
    /// Move the active actor to a cell.
    SelectTile(HexCoord),
    /// Move the active actor to the cell under a world-space point.
    ClickAt(WorldPoint),
    SkipTurn,
    CancelSelection,
}

/// What a [`BattleInput`] turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum InputOutcome {
    Moved(MoveReport),
    Skipped {
        actor: ActorId,
        notices: Vec<TurnNotice>,
    },
    SelectionCleared,
    /// The move was refused; nothing changed.
    Rejected(MoveError),
    /// Input arrived in a phase that does not accept it, or off the map.
    Ignored { phase: TurnPhase },
}

pub struct BattleSession {
    config: RuntimeConfig,
    field: Battlefield,
    turns: TurnSequencer,
    movement: MovementCoordinator,
    events: EventBus,
}

impl BattleSession {
    /// Create a new session builder
    pub fn builder() -> BattleSessionBuilder {
        BattleSessionBuilder::new()
    }

    /// Starts the first turn and opens move selection for it.
    pub fn start(&mut self) -> Result<Vec<TurnNotice>> {
        let notices = self.turns.start_battle()?.to_vec();
        self.after_turn_change(&notices)?;
        Ok(notices)
    }

    /// Applies one input. Input outside [`TurnPhase::PlayerTurnReady`] is
    /// ignored, except that a turn stuck in [`TurnPhase::PlayerMoving`] after
    /// a failed placement can still be skipped.
    pub async fn handle_input(&mut self, input: BattleInput) -> Result<InputOutcome> {
        let phase = self.turns.phase();
        let Some(actor) = self.turns.active_actor() else {
            return Err(RuntimeError::NotStarted);
        };
        let stranded_skip = phase == TurnPhase::PlayerMoving && input == BattleInput::SkipTurn;
        if phase != TurnPhase::PlayerTurnReady && !stranded_skip {
            warn!(%actor, %phase, ?input, "input ignored outside ready phase");
            return Ok(InputOutcome::Ignored { phase });
        }

        match input {
            BattleInput::SelectTile(cell) => self.move_active(actor, cell).await,
            BattleInput::ClickAt(point) => match self.field.world_to_map(point) {
                Some(cell) => self.move_active(actor, cell).await,
                None => {
                    warn!(%actor, x = point.x, y = point.y, "click outside the map");
                    Ok(InputOutcome::Ignored { phase })
                }
            },
            BattleInput::SkipTurn => {
                info!(%actor, %phase, "skips turn");
                self.movement.cancel_move_selection();
                let notices = self.turns.skip_turn()?.to_vec();
                self.after_turn_change(&notices)?;
                Ok(InputOutcome::Skipped { actor, notices })
            }
            BattleInput::CancelSelection => {
                self.movement.cancel_move_selection();
                Ok(InputOutcome::SelectionCleared)
            }
        }
    }

    async fn move_active(&mut self, actor: ActorId, cell: HexCoord) -> Result<InputOutcome> {
        let result = self
            .movement
            .execute_move(&mut self.field, &mut self.turns, actor, cell)
            .await;

        match result {
            Ok(report) => {
                self.log_turn_starts(&report.notices);
                self.open_selection()?;
                Ok(InputOutcome::Moved(report))
            }
            Err(err) if err.severity().is_rejection() => {
                Ok(InputOutcome::Rejected(err))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn after_turn_change(&mut self, notices: &[TurnNotice]) -> Result<()> {
        self.events.publish_turn_notices(notices);
        self.log_turn_starts(notices);
        self.open_selection()
    }

    fn log_turn_starts(&self, notices: &[TurnNotice]) {
        for notice in notices {
            if let TurnNotice::Started { actor } = notice {
                info!(turn = self.turns.turn_number(), "--- {actor}'s turn ---");
            }
        }
    }

    fn open_selection(&mut self) -> Result<()> {
        if let Some(actor) = self.turns.active_actor() {
            self.movement
                .begin_move_selection(&self.field, actor)
                .map_err(RuntimeError::Move)?;
        }
        Ok(())
    }

    /// Subscribe to a specific event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn field(&self) -> &Battlefield {
        &self.field
    }

    pub fn turns(&self) -> &TurnSequencer {
        &self.turns
    }

    pub fn movement(&self) -> &MovementCoordinator {
        &self.movement
    }

    pub fn active_actor(&self) -> Option<ActorId> {
        self.turns.active_actor()
    }

    pub fn phase(&self) -> TurnPhase {
        self.turns.phase()
    }

    /// Destinations currently offered to the active actor.
    pub fn destinations(&self) -> &[HexCoord] {
        self.movement.destinations()
    }
}

/// Builder for [`BattleSession`] with flexible configuration.
pub struct BattleSessionBuilder {
    config: RuntimeConfig,
    terrain: Option<Arc<dyn TerrainOracle>>,
    layout: Arc<dyn GridLayout>,
    animator: Arc<dyn PlacementAnimator>,
    events: Option<EventBus>,
    party: Vec<(ActorId, HexCoord)>,
    enemies: Vec<(ActorId, HexCoord)>,
}

impl BattleSessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            terrain: None,
            layout: Arc::new(AxialLayout::default()),
            animator: Arc::new(InstantAnimator),
            events: None,
            party: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the battle rules configuration
    pub fn battle_config(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    /// Set required terrain oracle
    pub fn terrain(mut self, terrain: impl TerrainOracle + 'static) -> Self {
        self.terrain = Some(Arc::new(terrain));
        self
    }

    pub fn shared_terrain(mut self, terrain: Arc<dyn TerrainOracle>) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn layout(mut self, layout: impl GridLayout + 'static) -> Self {
        self.layout = Arc::new(layout);
        self
    }

    pub fn animator(mut self, animator: impl PlacementAnimator + 'static) -> Self {
        self.animator = Arc::new(animator);
        self
    }

    /// Share an existing bus instead of creating one sized by the config.
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Adds a party member. Party order is turn order.
    pub fn party_member(mut self, actor: ActorId, cell: HexCoord) -> Self {
        self.party.push((actor, cell));
        self
    }

    pub fn enemy(mut self, actor: ActorId, cell: HexCoord) -> Self {
        self.enemies.push((actor, cell));
        self
    }

    /// Adds every placement from a loaded placement file.
    pub fn placements(mut self, placements: Placements) -> Self {
        self.party.extend(placements.party);
        self.enemies.extend(placements.enemies);
        self
    }

    /// Validates the configuration and assembles the session.
    ///
    /// No battle state exists unless every check passes.
    pub fn build(self) -> Result<BattleSession> {
        let terrain = self.terrain.ok_or(RuntimeError::MissingTerrain)?;

        let dimensions = terrain.dimensions();
        if !dimensions.is_valid() {
            return Err(RuntimeError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        if self.party.is_empty() {
            return Err(RuntimeError::EmptyRoster);
        }

        let mut field = Battlefield::new(terrain, self.layout);
        for (actor, cell) in &self.party {
            field.place(*actor, Side::Party, *cell)?;
        }
        for (actor, cell) in &self.enemies {
            field.place(*actor, Side::Enemy, *cell)?;
        }

        let mut turns = TurnSequencer::new();
        turns.initialize(self.party.iter().map(|(actor, _)| *actor).collect())?;

        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let movement =
            MovementCoordinator::new(self.config.battle.clone(), self.animator, events.clone());

        Ok(BattleSession {
            config: self.config,
            field,
            turns,
            movement,
            events,
        })
    }
}
