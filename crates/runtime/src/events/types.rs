//! Event payloads for each topic.

use battle_core::{ActorId, HexCoord};
use serde::{Deserialize, Serialize};

/// Events emitted while an actor picks and walks a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementEvent {
    /// Valid destinations computed for the active actor, for highlighting.
    SelectionStarted {
        actor: ActorId,
        destinations: Vec<HexCoord>,
    },

    /// The stored destinations were discarded.
    SelectionCleared { actor: ActorId },

    /// One route step finished and the logical position was updated.
    StepCompleted {
        actor: ActorId,
        position: HexCoord,
        step: usize,
    },

    /// The actor arrived and its turn was ended.
    MoveCompleted {
        actor: ActorId,
        from: HexCoord,
        to: HexCoord,
        steps: usize,
    },

    /// A destination pick was refused; game state is unchanged.
    MoveRejected {
        actor: ActorId,
        destination: HexCoord,
        reason: String,
    },
}
