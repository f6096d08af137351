//! Asynchronous abstraction for presenting an actor's relocation.
//!
//! The movement coordinator awaits one placement per route step, so an
//! implementation decides how long a step takes: a renderer tween, a timer,
//! or nothing at all.
use std::time::Duration;

use async_trait::async_trait;
use battle_core::ActorId;

use super::errors::PlacementError;
use super::layout::WorldPoint;

/// Moves an actor's presentation to `target` and resolves once the
/// transition has finished.
#[async_trait]
pub trait PlacementAnimator: Send + Sync {
    async fn place(
        &self,
        actor: ActorId,
        target: WorldPoint,
        duration: Duration,
    ) -> Result<(), PlacementError>;
}

/// Completes every placement immediately. Useful for headless runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimator;

#[async_trait]
impl PlacementAnimator for InstantAnimator {
    async fn place(
        &self,
        _actor: ActorId,
        _target: WorldPoint,
        _duration: Duration,
    ) -> Result<(), PlacementError> {
        Ok(())
    }
}

/// Waits out the requested duration on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimedAnimator;

#[async_trait]
impl PlacementAnimator for TimedAnimator {
    async fn place(
        &self,
        actor: ActorId,
        target: WorldPoint,
        duration: Duration,
    ) -> Result<(), PlacementError> {
        tracing::trace!(%actor, x = target.x, y = target.y, ?duration, "placement started");
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timed_animator_waits_for_the_duration() {
        let started = tokio::time::Instant::now();
        TimedAnimator
            .place(ActorId(1), WorldPoint::default(), Duration::from_millis(20))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn instant_animator_never_fails() {
        assert!(
            InstantAnimator
                .place(ActorId(1), WorldPoint::new(3.0, 4.0), Duration::from_secs(60))
                .await
                .is_ok()
        );
    }
}
