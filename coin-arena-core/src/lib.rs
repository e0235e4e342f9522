//! # Coin Arena
//!
//! Deterministic game loop for a small 3D coin collecting game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        COIN ARENA                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  config.rs       - JSON game configuration and tuning       │
//! │                                                              │
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point arithmetic             │
//! │  ├── vec2.rs     - Ground-plane vector (x, z)                │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── input.rs    - Key bindings and held-key state           │
//! │  ├── state.rs    - Avatar, arena, coins                      │
//! │  ├── tick.rs     - Fixed-step game loop                      │
//! │  ├── collision.rs- Planar distance checks                    │
//! │  ├── coin.rs     - Pickup, score, win                        │
//! │  ├── events.rs   - Per-tick events                           │
//! │  └── presenter.rs- Presentation boundary                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The `core/` and `game/` modules never touch floats, wall-clock time or
//! ambient randomness. Given a seed, a config and a sequence of input
//! frames, the simulation produces identical state on every platform.
//! Floats appear only at the presentation edge (`world_position`,
//! `yaw_radians`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, Tuning};
pub use core::fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use core::vec2::FixedVec2;
pub use core::rng::DeterministicRng;
pub use game::input::{Direction, InputFrame, InputRecording, InputState, Key};
pub use game::state::{Facing, GameState};
pub use game::tick::{tick, TickResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
