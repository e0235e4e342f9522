//! Game Loop Tick
//!
//! One fixed step of the game: movement, clamping, obstacle rejection,
//! coin pickup and the cosmetic coin spin. Integer math only, so the same
//! inputs always produce the same state.

use crate::config::{GameConfig, Tuning};
use crate::core::fixed::{fixed_mul, Fixed, FIXED_FRAC_1_SQRT_2};
use crate::core::vec2::FixedVec2;
use crate::game::coin::{collect_coins_in_reach, spin_coins};
use crate::game::collision::is_blocked;
use crate::game::events::GameEvent;
use crate::game::input::{Direction, InputFrame, InputRecording};
use crate::game::state::{Avatar, Facing, GameState};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick, in emission order
    pub events: Vec<GameEvent>,
    /// Whether the movement was rejected by an obstacle
    pub blocked: bool,
    /// Whether the last coin was collected this tick
    pub won: bool,
}

/// Run one tick.
///
/// 1. Remember the avatar position.
/// 2. Displace by `speed` along each held direction (up, down, left, right
///    order; the last one applied sets facing). Two axes add up to a
///    diagonal ~1.41x longer unless `normalize_diagonal` is set.
/// 3. Clamp into the arena.
/// 4. If any obstacle is closer than the collision radius, put the avatar
///    back where it started (both axes).
/// 5. Collect uncollected coins within the collection radius.
/// 6. Spin the coins still on the field.
/// 7. Report the avatar position for camera follow.
pub fn tick(state: &mut GameState, input: InputFrame, tuning: &Tuning) -> TickResult {
    let mut result = TickResult::default();

    state.tick += 1;
    let prev_position = state.avatar.position;

    apply_movement(&mut state.avatar, input, tuning.normalize_diagonal);
    state.avatar.position = state.arena.clamp(state.avatar.position);

    if is_blocked(&state.arena, state.avatar.position, tuning.collision_radius) {
        state.avatar.position = prev_position;
        result.blocked = true;
    }

    let collected = collect_coins_in_reach(state, tuning.collection_radius);
    result.won = collected.iter().any(GameEvent::is_win);
    result.events.extend(collected);

    spin_coins(state, tuning.coin_spin_step);

    result.events.push(GameEvent::avatar_moved(
        state.tick,
        state.avatar.position,
        state.avatar.facing,
    ));

    result
}

/// Move the avatar according to the held directions. No clamping.
fn apply_movement(avatar: &mut Avatar, input: InputFrame, normalize_diagonal: bool) {
    let mut dx: Fixed = 0;
    let mut dz: Fixed = 0;

    for direction in input.held() {
        match direction {
            Direction::Up => dz -= 1,
            Direction::Down => dz += 1,
            Direction::Left => dx -= 1,
            Direction::Right => dx += 1,
        }
        avatar.facing = Facing::from_direction(direction);
    }

    let step = if normalize_diagonal && dx != 0 && dz != 0 {
        fixed_mul(avatar.speed, FIXED_FRAC_1_SQRT_2)
    } else {
        avatar.speed
    };

    avatar.position = avatar.position + FixedVec2::new(dx * step, dz * step);
}

/// Replay a recorded session from its seed for `ticks` ticks.
///
/// Ticks past the end of the recording run idle. Returns the final state
/// and every event produced.
pub fn replay(
    seed: u64,
    config: &GameConfig,
    recording: &InputRecording,
    ticks: u64,
) -> (GameState, Vec<GameEvent>) {
    let tuning = config.tuning();
    let mut state = GameState::new(seed, config);
    let mut all_events = Vec::new();

    for t in 0..ticks {
        let result = tick(&mut state, recording.frame_at(t), &tuning);
        all_events.extend(result.events);
    }

    (state, all_events)
}
