#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{ActorId, HexCoord, TerrainKind};
use battle_runtime::{
    BattleSession, BattleSessionBuilder, HexMapOracle, PlacementAnimator, PlacementError,
    WorldPoint,
};

pub const A: ActorId = ActorId(1);
pub const B: ActorId = ActorId(2);
pub const ENEMY: ActorId = ActorId(9);

/// Records every placement request in order.
#[derive(Clone, Default)]
pub struct RecordingAnimator {
    pub placements: Arc<Mutex<Vec<(ActorId, WorldPoint, Duration)>>>,
}

impl RecordingAnimator {
    pub fn recorded(&self) -> Vec<(ActorId, WorldPoint, Duration)> {
        self.placements.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacementAnimator for RecordingAnimator {
    async fn place(
        &self,
        actor: ActorId,
        target: WorldPoint,
        duration: Duration,
    ) -> Result<(), PlacementError> {
        self.placements.lock().unwrap().push((actor, target, duration));
        tokio::task::yield_now().await;
        Ok(())
    }
}

/// Succeeds for the first `allowed` placements, then fails.
pub struct FailingAnimator {
    pub allowed: usize,
    pub calls: Mutex<usize>,
}

#[async_trait]
impl PlacementAnimator for FailingAnimator {
    async fn place(
        &self,
        actor: ActorId,
        _target: WorldPoint,
        _duration: Duration,
    ) -> Result<(), PlacementError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.allowed {
            return Err(PlacementError::new(actor, "renderer went away"));
        }
        Ok(())
    }
}

/// 5x5 open map with a wall at (2, 2): A at (0, 0), B at (2, 0), enemy at (4, 4).
pub fn skirmish() -> BattleSessionBuilder {
    BattleSession::builder()
        .terrain(HexMapOracle::open(5, 5).with_terrain(HexCoord::new(2, 2), TerrainKind::Wall))
        .party_member(A, HexCoord::new(0, 0))
        .party_member(B, HexCoord::new(2, 0))
        .enemy(ENEMY, HexCoord::new(4, 4))
}

pub fn started(builder: BattleSessionBuilder) -> BattleSession {
    let mut session = builder.build().unwrap();
    session.start().unwrap();
    session
}
