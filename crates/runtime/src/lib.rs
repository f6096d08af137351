//! Runtime orchestration for hex-grid battles.
//!
//! This crate wires the pure rules of `battle-core` to the collaborators a
//! running battle needs: actor placement, presentation transitions, input
//! gating, and event publication.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`movement`] drives the move sub-phase of a turn
//! - [`battlefield`] answers occupancy queries for both sides
//! - [`api`] exposes the collaborator traits and error types
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] provides terrain adapters built from loaded content
pub mod api;
pub mod battlefield;
pub mod events;
pub mod movement;
pub mod oracle;
pub mod session;

pub use api::{
    AxialLayout, GridLayout, InstantAnimator, MoveError, PlacementAnimator, PlacementError,
    Result, RuntimeError, TimedAnimator, WorldPoint,
};
pub use battlefield::{Battlefield, Side};
pub use events::{Event, EventBus, MovementEvent, Topic};
pub use movement::{MoveReport, MoveSelection, MovementCoordinator};
pub use oracle::HexMapOracle;
pub use session::{BattleInput, BattleSession, BattleSessionBuilder, InputOutcome, RuntimeConfig};
