//! Game State Definitions
//!
//! Everything the tick reads and writes lives in [`GameState`].
//! Coins and obstacles are stored in spawn order, which is also the order
//! they are checked and hashed in.

use serde::{Serialize, Deserialize};

use crate::config::{GameConfig, Tuning};
use crate::core::fixed::{to_float, Fixed, AVATAR_HEIGHT, COIN_HEIGHT, OBSTACLE_HEIGHT};
use crate::core::vec2::FixedVec2;
use crate::core::rng::DeterministicRng;
use crate::core::hash::{StateHash, compute_state_hash};
use crate::game::input::Direction;

// =============================================================================
// AVATAR
// =============================================================================

/// Cardinal orientation of the avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Facing {
    /// Looking towards -z (yaw 0)
    #[default]
    North = 0,
    /// Looking towards +z (yaw π)
    South = 1,
    /// Looking towards -x (yaw π/2)
    West = 2,
    /// Looking towards +x (yaw -π/2)
    East = 3,
}

impl Facing {
    /// Orientation after moving in `direction`.
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Facing::North,
            Direction::Down => Facing::South,
            Direction::Left => Facing::West,
            Direction::Right => Facing::East,
        }
    }

    /// Rotation about the vertical axis, for rendering.
    pub fn yaw_radians(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Facing::North => 0.0,
            Facing::South => PI,
            Facing::West => FRAC_PI_2,
            Facing::East => -FRAC_PI_2,
        }
    }
}

/// The player-controlled character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    /// Position on the floor plane
    pub position: FixedVec2,
    /// Current orientation
    pub facing: Facing,
    /// Displacement per tick per held direction
    pub speed: Fixed,
}

impl Avatar {
    /// Root height above the floor.
    pub const HEIGHT: Fixed = AVATAR_HEIGHT;

    /// Create an avatar at `position` facing north.
    pub fn new(position: FixedVec2, speed: Fixed) -> Self {
        Self {
            position,
            facing: Facing::North,
            speed,
        }
    }

    /// World-space position for rendering.
    pub fn world_position(&self) -> [f32; 3] {
        let (x, z) = self.position.to_floats();
        [x, to_float(Self::HEIGHT), z]
    }
}

// =============================================================================
// ARENA
// =============================================================================

/// Static obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Position on the floor plane
    pub position: FixedVec2,
}

impl Obstacle {
    /// Centre height of the obstacle box.
    pub const HEIGHT: Fixed = OBSTACLE_HEIGHT;

    /// World-space centre for rendering.
    pub fn world_position(&self) -> [f32; 3] {
        let (x, z) = self.position.to_floats();
        [x, to_float(Self::HEIGHT), z]
    }
}

/// Square play area and its obstacles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    /// Avatar is clamped to `[-bound, bound]` on both axes
    pub bound: Fixed,
    /// Obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl Arena {
    /// Arena with no obstacles.
    pub fn new(bound: Fixed) -> Self {
        Self {
            bound,
            obstacles: Vec::new(),
        }
    }

    /// Add an obstacle.
    pub fn add_obstacle(&mut self, position: FixedVec2) {
        self.obstacles.push(Obstacle { position });
    }

    /// Clamp a position into the arena.
    #[inline]
    pub fn clamp(&self, position: FixedVec2) -> FixedVec2 {
        position.clamp_square(self.bound)
    }
}

// =============================================================================
// COINS
// =============================================================================

/// Collectible coin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Index in spawn order
    pub id: u32,
    /// Position on the floor plane
    pub position: FixedVec2,
    /// Set once, never cleared
    pub collected: bool,
    /// Cosmetic rotation in `[0, 2π)`
    pub spin: Fixed,
}

impl Coin {
    /// Centre height of the coin.
    pub const HEIGHT: Fixed = COIN_HEIGHT;

    /// Create an uncollected coin.
    pub fn new(id: u32, position: FixedVec2) -> Self {
        Self {
            id,
            position,
            collected: false,
            spin: 0,
        }
    }

    /// World-space centre for rendering.
    pub fn world_position(&self) -> [f32; 3] {
        let (x, z) = self.position.to_floats();
        [x, to_float(Self::HEIGHT), z]
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Ticks simulated so far
    pub tick: u64,
    /// Seed the layout was generated from
    pub rng_seed: u64,
    /// The player
    pub avatar: Avatar,
    /// Bounds and obstacles
    pub arena: Arena,
    /// Coins, in spawn order
    pub coins: Vec<Coin>,
    /// Number of coins with `collected == true`
    pub collected_coins: u32,
    /// Set when every coin has been collected
    pub won: bool,
}

impl GameState {
    /// Build a session from a seed.
    ///
    /// The avatar spawns at the origin. Obstacles are placed first, then
    /// coins, each by independent uniform draws over the spawn square.
    /// Nothing keeps them apart, from each other or from the spawn point.
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        let tuning = config.tuning();
        let mut rng = DeterministicRng::new(seed);
        let mut state = Self::empty(seed, &tuning);

        for _ in 0..config.obstacle_count {
            let position = rng.random_position(tuning.spawn_half_extent);
            state.arena.add_obstacle(position);
        }
        for _ in 0..config.coin_count {
            let position = rng.random_position(tuning.spawn_half_extent);
            state.spawn_coin(position);
        }

        state
    }

    /// Session with the avatar at the origin and nothing else placed.
    ///
    /// Used to build hand-made layouts.
    pub fn empty(seed: u64, tuning: &Tuning) -> Self {
        Self {
            tick: 0,
            rng_seed: seed,
            avatar: Avatar::new(FixedVec2::ZERO, tuning.avatar_speed),
            arena: Arena::new(tuning.arena_bound),
            coins: Vec::new(),
            collected_coins: 0,
            won: false,
        }
    }

    /// Add a coin. Returns its id.
    pub fn spawn_coin(&mut self, position: FixedVec2) -> u32 {
        let id = self.coins.len() as u32;
        self.coins.push(Coin::new(id, position));
        id
    }

    /// Total number of coins in the session.
    pub fn total_coins(&self) -> u32 {
        self.coins.len() as u32
    }

    /// Compute deterministic hash of the state.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.rng_seed, |hasher| {
            hasher.update_vec2(self.avatar.position);
            hasher.update_u8(self.avatar.facing as u8);
            hasher.update_fixed(self.avatar.speed);

            hasher.update_fixed(self.arena.bound);
            hasher.update_u32(self.arena.obstacles.len() as u32);
            for obstacle in &self.arena.obstacles {
                hasher.update_vec2(obstacle.position);
            }

            hasher.update_u32(self.coins.len() as u32);
            for coin in &self.coins {
                hasher.update_u32(coin.id);
                hasher.update_vec2(coin.position);
                hasher.update_bool(coin.collected);
                hasher.update_fixed(coin.spin);
            }

            hasher.update_u32(self.collected_coins);
            hasher.update_bool(self.won);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_default_counts() {
        let state = GameState::new(42, &GameConfig::default());
        let tuning = GameConfig::default().tuning();

        assert_eq!(state.arena.obstacles.len(), 8);
        assert_eq!(state.total_coins(), 10);
        assert_eq!(state.avatar.position, FixedVec2::ZERO);
        assert_eq!(state.collected_coins, 0);
        assert!(!state.won);

        for obstacle in &state.arena.obstacles {
            assert!(obstacle.position.is_in_square(tuning.spawn_half_extent));
        }
        for coin in &state.coins {
            assert!(coin.position.is_in_square(tuning.spawn_half_extent));
            assert!(!coin.collected);
        }
    }

    #[test]
    fn test_layout_is_seeded() {
        let config = GameConfig::default();
        let a = GameState::new(7, &config);
        let b = GameState::new(7, &config);
        let c = GameState::new(8, &config);

        assert_eq!(a.arena, b.arena);
        assert_eq!(a.coins, b.coins);
        assert_eq!(a.compute_hash(), b.compute_hash());
        assert_ne!(a.compute_hash(), c.compute_hash());
    }

    #[test]
    fn test_coin_ids_follow_spawn_order() {
        let mut state = GameState::empty(0, &Tuning::default());
        assert_eq!(state.spawn_coin(FixedVec2::ZERO), 0);
        assert_eq!(state.spawn_coin(FixedVec2::ZERO), 1);
        assert_eq!(state.total_coins(), 2);
    }

    #[test]
    fn test_facing_yaw() {
        assert_eq!(Facing::from_direction(Direction::Up).yaw_radians(), 0.0);
        assert_eq!(Facing::from_direction(Direction::Down), Facing::South);
        assert!(Facing::East.yaw_radians() < 0.0);
    }

    #[test]
    fn test_world_positions_use_fixed_heights() {
        let state = GameState::new(3, &GameConfig::default());
        assert_eq!(state.avatar.world_position(), [0.0, 0.5, 0.0]);
        assert_eq!(state.arena.obstacles[0].world_position()[1], 1.0);
        assert_eq!(state.coins[0].world_position()[1], 0.5);
    }
}
