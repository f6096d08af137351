//! Round-robin turn sequencing for the player side of a battle.
//!
//! [`TurnSequencer`] owns the roster and the turn cursor. Each turn walks the
//! phases `PlayerTurnStarting → PlayerTurnReady → PlayerMoving → TurnEnding`
//! and exactly one actor is active once the battle has started. Operations
//! return the [`TurnNotice`]s they produced so the runtime can publish them.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{BattleError, ErrorSeverity};
use crate::state::ActorId;

/// Phase of the turn cycle that gates which inputs are accepted.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// Sequencer has not been initialized with a roster.
    #[default]
    None,
    /// Transient: the next actor has been selected.
    PlayerTurnStarting,
    /// The active actor may pick a destination or skip.
    PlayerTurnReady,
    /// A relocation is in flight; input is blocked.
    PlayerMoving,
    /// The active actor is done; the cursor is about to advance.
    TurnEnding,
}

impl TurnPhase {
    /// Position of the phase inside a single turn, used to keep transitions monotonic.
    const fn rank(self) -> u8 {
        match self {
            TurnPhase::None => 0,
            TurnPhase::PlayerTurnStarting => 1,
            TurnPhase::PlayerTurnReady => 2,
            TurnPhase::PlayerMoving => 3,
            TurnPhase::TurnEnding => 4,
        }
    }

    /// True when the active actor may end or skip its turn.
    pub const fn accepts_turn_end(self) -> bool {
        matches!(self, TurnPhase::PlayerTurnReady | TurnPhase::PlayerMoving)
    }
}

/// Notification emitted by a sequencer operation, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnNotice {
    PhaseEntered { actor: ActorId, phase: TurnPhase },
    Started { actor: ActorId },
    Ended { actor: ActorId },
}

/// Notices produced by a single operation.
pub type TurnNotices = ArrayVec<TurnNotice, { BattleConfig::MAX_TURN_NOTICES }>;

/// Errors that can occur during turn operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("roster is empty; the battle cannot start")]
    EmptyRoster,

    #[error("actor {0} appears more than once in the roster")]
    DuplicateActor(ActorId),

    #[error("sequencer has not been initialized with a roster")]
    NotInitialized,

    #[error("battle has already started")]
    AlreadyStarted,

    #[error("cannot {operation} while in phase {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: TurnPhase,
    },

    #[error("phase cannot move from {from} back to {to}")]
    PhaseRegression { from: TurnPhase, to: TurnPhase },
}

impl BattleError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyRoster | Self::DuplicateActor(_) | Self::NotInitialized => {
                ErrorSeverity::Fatal
            }
            Self::AlreadyStarted | Self::InvalidPhase { .. } | Self::PhaseRegression { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "TURN_EMPTY_ROSTER",
            Self::DuplicateActor(_) => "TURN_DUPLICATE_ACTOR",
            Self::NotInitialized => "TURN_NOT_INITIALIZED",
            Self::AlreadyStarted => "TURN_ALREADY_STARTED",
            Self::InvalidPhase { .. } => "TURN_INVALID_PHASE",
            Self::PhaseRegression { .. } => "TURN_PHASE_REGRESSION",
        }
    }
}

/// Finite-state machine cycling control through an ordered roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSequencer {
    roster: Vec<ActorId>,
    cursor: Option<usize>,
    phase: TurnPhase,
    turn_number: u64,
}

impl TurnSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the roster and primes the sequencer so the first
    /// [`start_battle`](Self::start_battle) selects `roster[0]`.
    ///
    /// An empty roster is accepted here and rejected at battle start.
    pub fn initialize(&mut self, roster: Vec<ActorId>) -> Result<(), TurnError> {
        if let Some(duplicate) = roster
            .iter()
            .enumerate()
            .find_map(|(i, actor)| roster[..i].contains(actor).then_some(*actor))
        {
            return Err(TurnError::DuplicateActor(duplicate));
        }

        self.roster = roster;
        self.cursor = None;
        self.phase = TurnPhase::TurnEnding;
        self.turn_number = 0;
        Ok(())
    }

    /// Starts the first turn.
    pub fn start_battle(&mut self) -> Result<TurnNotices, TurnError> {
        if self.phase == TurnPhase::None {
            return Err(TurnError::NotInitialized);
        }
        if self.roster.is_empty() {
            return Err(TurnError::EmptyRoster);
        }
        if self.cursor.is_some() {
            return Err(TurnError::AlreadyStarted);
        }

        let mut notices = TurnNotices::new();
        self.advance(&mut notices);
        Ok(notices)
    }

    /// Ends the active actor's turn and starts the next one.
    pub fn end_turn(&mut self) -> Result<TurnNotices, TurnError> {
        self.finish_turn("end turn")
    }

    /// Ends the active actor's turn without a move having occurred.
    pub fn skip_turn(&mut self) -> Result<TurnNotices, TurnError> {
        self.finish_turn("skip turn")
    }

    /// Moves the current turn forward to `phase`, e.g. marking
    /// [`TurnPhase::PlayerMoving`] while a relocation is in flight.
    ///
    /// Setting the current phase again is a no-op that emits nothing.
    /// Starting and ending a turn belong to the sequencer; use
    /// [`end_turn`](Self::end_turn) or [`skip_turn`](Self::skip_turn) instead.
    pub fn set_phase(&mut self, phase: TurnPhase) -> Result<TurnNotices, TurnError> {
        let actor = self.active_actor().ok_or(TurnError::InvalidPhase {
            operation: "set phase",
            phase: self.phase,
        })?;

        let reserved = match phase {
            TurnPhase::PlayerTurnStarting => Some("enter player_turn_starting directly"),
            TurnPhase::TurnEnding => Some("enter turn_ending directly"),
            _ => None,
        };
        if let Some(operation) = reserved {
            return Err(TurnError::InvalidPhase {
                operation,
                phase: self.phase,
            });
        }

        if phase == TurnPhase::None || phase.rank() < self.phase.rank() {
            return Err(TurnError::PhaseRegression {
                from: self.phase,
                to: phase,
            });
        }

        let mut notices = TurnNotices::new();
        if phase != self.phase {
            self.enter(actor, phase, &mut notices);
        }
        Ok(notices)
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The actor whose turn it is, once the battle has started.
    pub fn active_actor(&self) -> Option<ActorId> {
        self.cursor.and_then(|index| self.roster.get(index).copied())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn roster(&self) -> &[ActorId] {
        &self.roster
    }

    /// Number of turns started since the last [`initialize`](Self::initialize).
    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    pub fn is_active(&self, actor: ActorId) -> bool {
        self.active_actor() == Some(actor)
    }

    fn finish_turn(&mut self, operation: &'static str) -> Result<TurnNotices, TurnError> {
        let actor = match self.active_actor() {
            Some(actor) if self.phase.accepts_turn_end() => actor,
            _ => {
                return Err(TurnError::InvalidPhase {
                    operation,
                    phase: self.phase,
                });
            }
        };

        let mut notices = TurnNotices::new();
        self.enter(actor, TurnPhase::TurnEnding, &mut notices);
        push(&mut notices, TurnNotice::Ended { actor });
        self.advance(&mut notices);
        Ok(notices)
    }

    /// Selects the next roster entry and walks it through Starting into Ready.
    ///
    /// Callers guarantee the roster is non-empty.
    fn advance(&mut self, notices: &mut TurnNotices) {
        let next = self.cursor.map_or(0, |index| (index + 1) % self.roster.len());
        self.cursor = Some(next);
        self.turn_number += 1;

        let actor = self.roster[next];
        self.enter(actor, TurnPhase::PlayerTurnStarting, notices);
        self.enter(actor, TurnPhase::PlayerTurnReady, notices);
        push(notices, TurnNotice::Started { actor });
    }

    fn enter(&mut self, actor: ActorId, phase: TurnPhase, notices: &mut TurnNotices) {
        self.phase = phase;
        push(notices, TurnNotice::PhaseEntered { actor, phase });
    }
}

fn push(notices: &mut TurnNotices, notice: TurnNotice) {
    // Capacity covers the longest operation (end turn: five notices).
    let _ = notices.try_push(notice);
}
