//! Collision Detection
//!
//! Planar distance checks between the avatar and the arena's contents.
//! Heights never enter the comparison.

use crate::core::fixed::Fixed;
use crate::core::vec2::FixedVec2;
use crate::game::state::{Arena, Coin};

/// Index of the first obstacle closer than `radius` to `position`.
pub fn first_blocking_obstacle(arena: &Arena, position: FixedVec2, radius: Fixed) -> Option<usize> {
    arena
        .obstacles
        .iter()
        .position(|obstacle| position.is_within(obstacle.position, radius))
}

/// Check if `position` is blocked by any obstacle.
#[inline]
pub fn is_blocked(arena: &Arena, position: FixedVec2, radius: Fixed) -> bool {
    first_blocking_obstacle(arena, position, radius).is_some()
}

/// Check if an uncollected coin is within pickup range of `position`.
#[inline]
pub fn check_coin_collision(position: FixedVec2, coin: &Coin, radius: Fixed) -> bool {
    !coin.collected && position.is_within(coin.position, radius)
}

/// Ids of all uncollected coins in pickup range, in spawn order.
pub fn coins_in_reach(coins: &[Coin], position: FixedVec2, radius: Fixed) -> Vec<u32> {
    coins
        .iter()
        .filter(|coin| check_coin_collision(position, coin, radius))
        .map(|coin| coin.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{to_fixed, ARENA_BOUND, COLLISION_RADIUS, COLLECTION_RADIUS};

    #[test]
    fn test_obstacle_blocking() {
        let mut arena = Arena::new(ARENA_BOUND);
        arena.add_obstacle(FixedVec2::new(to_fixed(5.0), 0));
        arena.add_obstacle(FixedVec2::new(0, to_fixed(0.5)));

        assert_eq!(first_blocking_obstacle(&arena, FixedVec2::ZERO, COLLISION_RADIUS), Some(1));
        assert!(is_blocked(&arena, FixedVec2::new(to_fixed(4.5), 0), COLLISION_RADIUS));

        // Exactly one radius away is not a collision
        assert!(!is_blocked(&arena, FixedVec2::new(to_fixed(4.0), 0), COLLISION_RADIUS));
        assert!(!is_blocked(&arena, FixedVec2::new(to_fixed(-5.0), 0), COLLISION_RADIUS));
    }

    #[test]
    fn test_empty_arena_never_blocks() {
        let arena = Arena::new(ARENA_BOUND);
        assert!(!is_blocked(&arena, FixedVec2::ZERO, COLLISION_RADIUS));
    }

    #[test]
    fn test_coin_collision() {
        let near = Coin::new(0, FixedVec2::new(to_fixed(0.3), 0));
        let far = Coin::new(1, FixedVec2::new(to_fixed(5.0), 0));
        let mut taken = Coin::new(2, FixedVec2::ZERO);
        taken.collected = true;

        assert!(check_coin_collision(FixedVec2::ZERO, &near, COLLECTION_RADIUS));
        assert!(!check_coin_collision(FixedVec2::ZERO, &far, COLLECTION_RADIUS));
        assert!(!check_coin_collision(FixedVec2::ZERO, &taken, COLLECTION_RADIUS));

        let coins = vec![near, far, taken];
        assert_eq!(coins_in_reach(&coins, FixedVec2::ZERO, COLLECTION_RADIUS), vec![0]);
    }
}
