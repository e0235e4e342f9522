//! Coin Collection
//!
//! Pickup, score bookkeeping and the win transition.

use tracing::{debug, info};

use crate::core::fixed::{wrap_angle, Fixed};
use crate::game::collision::coins_in_reach;
use crate::game::events::GameEvent;
use crate::game::state::GameState;

/// Collect one coin.
///
/// Returns the events produced, or an empty list if the coin does not
/// exist or was already collected. Emits `GameWon` on the transition to
/// all-collected only.
pub fn collect_coin(state: &mut GameState, coin_id: u32) -> Vec<GameEvent> {
    let tick = state.tick;
    let total = state.total_coins();

    let Some(coin) = state.coins.get_mut(coin_id as usize) else {
        return Vec::new();
    };
    if coin.collected {
        return Vec::new();
    }

    coin.collected = true;
    let position = coin.position;

    state.collected_coins += 1;
    let collected = state.collected_coins;
    debug!(tick, coin_id, collected, total, "coin collected");

    let mut events = vec![
        GameEvent::coin_collected(tick, coin_id, position),
        GameEvent::score_changed(tick, collected, total),
    ];

    if collected == total && !state.won {
        state.won = true;
        info!(tick, total, "all coins collected");
        events.push(GameEvent::game_won(tick, total));
    }

    events
}

/// Collect every uncollected coin within `radius` of the avatar.
pub fn collect_coins_in_reach(state: &mut GameState, radius: Fixed) -> Vec<GameEvent> {
    let reachable = coins_in_reach(&state.coins, state.avatar.position, radius);

    let mut events = Vec::new();
    for coin_id in reachable {
        events.extend(collect_coin(state, coin_id));
    }
    events
}

/// Advance the cosmetic spin of every coin still on the field.
pub fn spin_coins(state: &mut GameState, step: Fixed) {
    for coin in state.coins.iter_mut().filter(|c| !c.collected) {
        coin.spin = wrap_angle(coin.spin.wrapping_add(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::core::fixed::{to_fixed, COIN_SPIN_STEP, COLLECTION_RADIUS, FIXED_TAU};
    use crate::core::vec2::FixedVec2;
    use crate::game::events::GameEventData;

    fn two_coin_state() -> GameState {
        let mut state = GameState::empty(0, &Tuning::default());
        state.spawn_coin(FixedVec2::new(to_fixed(0.5), 0));
        state.spawn_coin(FixedVec2::new(to_fixed(8.0), 0));
        state
    }

    #[test]
    fn test_collect_coin_updates_score() {
        let mut state = two_coin_state();

        let events = collect_coin(&mut state, 0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].data, GameEventData::ScoreChanged { collected: 1, total: 2 });
        assert!(state.coins[0].collected);
        assert_eq!(state.collected_coins, 1);
        assert!(!state.won);
    }

    #[test]
    fn test_collect_coin_is_idempotent() {
        let mut state = two_coin_state();
        collect_coin(&mut state, 0);

        assert!(collect_coin(&mut state, 0).is_empty());
        assert!(collect_coin(&mut state, 99).is_empty());
        assert_eq!(state.collected_coins, 1);
    }

    #[test]
    fn test_last_coin_wins_once() {
        let mut state = two_coin_state();
        collect_coin(&mut state, 0);
        let events = collect_coin(&mut state, 1);

        assert!(state.won);
        assert_eq!(events.iter().filter(|e| e.is_win()).count(), 1);
    }

    #[test]
    fn test_collect_in_reach_only_takes_near_coins() {
        let mut state = two_coin_state();
        let events = collect_coins_in_reach(&mut state, COLLECTION_RADIUS);

        assert_eq!(events.len(), 2);
        assert!(state.coins[0].collected);
        assert!(!state.coins[1].collected);
    }

    #[test]
    fn test_spin_skips_collected_and_wraps() {
        let mut state = two_coin_state();
        collect_coin(&mut state, 0);
        state.coins[1].spin = FIXED_TAU - 1;

        spin_coins(&mut state, COIN_SPIN_STEP);

        assert_eq!(state.coins[0].spin, 0);
        assert_eq!(state.coins[1].spin, COIN_SPIN_STEP - 1);
    }
}
