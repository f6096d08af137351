//! Topic-based event bus implementation.

use std::collections::HashMap;

use battle_core::TurnNotice;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::MovementEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Turn phase changes, turn starts and turn ends
    Turn,
    /// Move selection and relocation progress
    Movement,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Turn(TurnNotice),
    Movement(MovementEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Turn(_) => Topic::Turn,
            Event::Movement(_) => Topic::Movement,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    turn: broadcast::Sender<Event>,
    movement: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turn: broadcast::channel(capacity).0,
            movement: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Turn => &self.turn,
            Topic::Movement => &self.movement,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    pub fn publish_turn_notices(&self, notices: &[TurnNotice]) {
        for notice in notices {
            self.publish(Event::Turn(*notice));
        }
    }

    pub fn publish_movement(&self, event: MovementEvent) {
        self.publish(Event::Movement(event));
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{ActorId, HexCoord};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut turns = bus.subscribe(Topic::Turn);
        let mut movement = bus.subscribe(Topic::Movement);

        bus.publish_turn_notices(&[TurnNotice::Started { actor: ActorId(1) }]);
        bus.publish_movement(MovementEvent::SelectionCleared { actor: ActorId(1) });

        assert_eq!(
            turns.recv().await.unwrap(),
            Event::Turn(TurnNotice::Started { actor: ActorId(1) })
        );
        assert!(turns.try_recv().is_err());
        assert_eq!(movement.recv().await.unwrap().topic(), Topic::Movement);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish_movement(MovementEvent::MoveRejected {
            actor: ActorId(2),
            destination: HexCoord::new(9, 9),
            reason: "unreachable".into(),
        });
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let mut rx = bus.subscribe_multiple(&[Topic::Turn]);

        clone.publish(Event::Turn(TurnNotice::Ended { actor: ActorId(4) }));
        let rx = rx.get_mut(&Topic::Turn).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Event::Turn(TurnNotice::Ended { .. }))));
    }
}
