//! Deterministic tactical-movement rules for hex-grid battles.
//!
//! `battle-core` defines the canonical grid math ([`hex`]), the turn cycle
//! ([`turn`]), and the read-only oracle seams ([`env`]) that callers implement
//! to describe terrain and occupancy. Nothing here performs I/O or holds actor
//! positions; the runtime owns that state and hands it in per call.
pub mod config;
pub mod env;
pub mod error;
pub mod hex;
pub mod state;
pub mod turn;

pub use config::BattleConfig;
pub use env::{GridDimensions, OccupancyOracle, OpenField, StaticTile, TerrainKind, TerrainOracle};
pub use error::{BattleError, ErrorSeverity};
pub use hex::{
    HexCoord, HexDirection, ReachQuery, ReachableSet, RouteError, RouteSteps, quantize,
    reachable, route, route_cells, straight_projection,
};
pub use state::ActorId;
pub use turn::{TurnError, TurnNotice, TurnNotices, TurnPhase, TurnSequencer};
