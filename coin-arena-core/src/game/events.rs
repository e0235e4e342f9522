//! Game Events
//!
//! Everything the presentation layer needs to react to, returned from each
//! tick instead of being pushed into a renderer.

use serde::{Serialize, Deserialize};
use crate::core::vec2::FixedVec2;
use crate::game::state::Facing;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Avatar collected a coin
    CoinCollected {
        /// Collected coin
        coin_id: u32,
        /// Where it was
        position: FixedVec2,
    },

    /// Score display should change
    ScoreChanged {
        /// Coins collected so far
        collected: u32,
        /// Coins in the session
        total: u32,
    },

    /// Last coin was collected
    GameWon {
        /// Coins in the session
        total: u32,
    },

    /// Avatar state after the tick, for camera follow
    AvatarMoved {
        /// Avatar position
        position: FixedVec2,
        /// Avatar orientation
        facing: Facing,
    },
}

/// A game event stamped with the tick that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u64,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u64, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create coin collected event.
    pub fn coin_collected(tick: u64, coin_id: u32, position: FixedVec2) -> Self {
        Self::new(tick, GameEventData::CoinCollected { coin_id, position })
    }

    /// Create score changed event.
    pub fn score_changed(tick: u64, collected: u32, total: u32) -> Self {
        Self::new(tick, GameEventData::ScoreChanged { collected, total })
    }

    /// Create game won event.
    pub fn game_won(tick: u64, total: u32) -> Self {
        Self::new(tick, GameEventData::GameWon { total })
    }

    /// Create avatar moved event.
    pub fn avatar_moved(tick: u64, position: FixedVec2, facing: Facing) -> Self {
        Self::new(tick, GameEventData::AvatarMoved { position, facing })
    }

    /// Check whether this is a win event.
    pub fn is_win(&self) -> bool {
        matches!(self.data, GameEventData::GameWon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_stamp_tick() {
        let event = GameEvent::score_changed(12, 3, 10);
        assert_eq!(event.tick, 12);
        assert_eq!(event.data, GameEventData::ScoreChanged { collected: 3, total: 10 });
        assert!(!event.is_win());
        assert!(GameEvent::game_won(40, 10).is_win());
    }

    #[test]
    fn test_events_serialize_for_logging() {
        let event = GameEvent::coin_collected(5, 2, FixedVec2::new(1, -1));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("CoinCollected"));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
