//! Unified error types surfaced by the runtime API.
//!
//! [`MoveError`] covers a single move request; [`RuntimeError`] wraps session
//! setup failures and everything bubbling up from the core rules.
use battle_core::{
    ActorId, BattleError, ErrorSeverity, HexCoord, RouteError, TurnError, TurnPhase,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// A placement transition could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("placement of {actor} failed: {reason}")]
pub struct PlacementError {
    pub actor: ActorId,
    pub reason: String,
}

impl PlacementError {
    pub fn new(actor: ActorId, reason: impl Into<String>) -> Self {
        Self {
            actor,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{actor} cannot move during {active:?}'s turn")]
    NotActorsTurn {
        actor: ActorId,
        active: Option<ActorId>,
    },

    #[error("cannot move while in phase {phase}")]
    InvalidPhase { phase: TurnPhase },

    #[error("{actor} has no position on the battlefield")]
    UnknownActor { actor: ActorId },

    #[error("{destination} is not a valid destination for {actor}")]
    InvalidDestination {
        actor: ActorId,
        destination: HexCoord,
    },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl BattleError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActorsTurn { .. } | Self::InvalidPhase { .. } => ErrorSeverity::Validation,
            Self::InvalidDestination { .. } => ErrorSeverity::Recoverable,
            Self::UnknownActor { .. } | Self::Placement(_) => ErrorSeverity::Internal,
            Self::Route(err) => err.severity(),
            Self::Turn(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActorsTurn { .. } => "MOVE_NOT_ACTORS_TURN",
            Self::InvalidPhase { .. } => "MOVE_INVALID_PHASE",
            Self::UnknownActor { .. } => "MOVE_UNKNOWN_ACTOR",
            Self::InvalidDestination { .. } => "MOVE_INVALID_DESTINATION",
            Self::Route(err) => err.error_code(),
            Self::Turn(err) => err.error_code(),
            Self::Placement(_) => "MOVE_PLACEMENT_FAILED",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("battle requires a terrain oracle to be configured before building")]
    MissingTerrain,

    #[error("battle map must have non-zero dimensions, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("battle requires at least one party member")]
    EmptyRoster,

    #[error("actor {0} is placed more than once")]
    DuplicateActor(ActorId),

    #[error("actor {actor} cannot be placed on {cell}")]
    BlockedPlacement { actor: ActorId, cell: HexCoord },

    #[error("actor {0} is not on the battlefield")]
    UnknownActor(ActorId),

    #[error("battle has not started")]
    NotStarted,

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingTerrain
            | Self::InvalidDimensions { .. }
            | Self::EmptyRoster
            | Self::DuplicateActor(_)
            | Self::BlockedPlacement { .. } => ErrorSeverity::Fatal,
            Self::UnknownActor(_) => ErrorSeverity::Internal,
            Self::NotStarted => ErrorSeverity::Validation,
            Self::Turn(err) => err.severity(),
            Self::Move(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTerrain => "RUNTIME_MISSING_TERRAIN",
            Self::InvalidDimensions { .. } => "RUNTIME_INVALID_DIMENSIONS",
            Self::EmptyRoster => "RUNTIME_EMPTY_ROSTER",
            Self::DuplicateActor(_) => "RUNTIME_DUPLICATE_ACTOR",
            Self::BlockedPlacement { .. } => "RUNTIME_BLOCKED_PLACEMENT",
            Self::UnknownActor(_) => "RUNTIME_UNKNOWN_ACTOR",
            Self::NotStarted => "RUNTIME_NOT_STARTED",
            Self::Turn(err) => err.error_code(),
            Self::Move(err) => err.error_code(),
        }
    }
}
