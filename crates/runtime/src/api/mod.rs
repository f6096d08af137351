//! Public runtime API surface.
//!
//! This module gathers the collaborator traits and error types exposed to
//! consumers so the battlefield and session code can stay focused on
//! orchestration.

pub mod animator;
pub mod errors;
pub mod layout;

pub use animator::{InstantAnimator, PlacementAnimator, TimedAnimator};
pub use errors::{MoveError, PlacementError, Result, RuntimeError};
pub use layout::{AxialLayout, GridLayout, WorldPoint};
