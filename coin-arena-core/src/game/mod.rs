//! Game Logic Module
//!
//! All game simulation code. Deterministic apart from the presenter, which
//! only ever reads state.
//!
//! ## Module Structure
//!
//! - `input`: Key bindings, held-key tracking, input recording
//! - `state`: Game state, avatar, arena, coins
//! - `tick`: Fixed-step game loop and replay
//! - `collision`: Planar distance checks
//! - `coin`: Coin pickup, score and win transition
//! - `events`: Per-tick events for presentation and replay
//! - `presenter`: Presentation boundary

pub mod input;
pub mod state;
pub mod tick;
pub mod collision;
pub mod coin;
pub mod events;
pub mod presenter;

// Re-export key types
pub use input::{Direction, InputDelta, InputFrame, InputRecording, InputState, Key, KEY_BINDINGS};
pub use state::{Arena, Avatar, Coin, Facing, GameState, Obstacle};
pub use tick::{replay, tick, TickResult};
pub use events::{GameEvent, GameEventData};
pub use presenter::{present, Presenter, TracingPresenter};
