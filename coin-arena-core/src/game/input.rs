//! Input Capture and Normalization
//!
//! Raw key identifiers are mapped through [`KEY_BINDINGS`] to logical
//! directions. The game loop only ever sees an [`InputFrame`] snapshot.

use std::fmt;
use serde::{Serialize, Deserialize};

// =============================================================================
// DIRECTIONS AND KEYS
// =============================================================================

/// Logical movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards -z
    Up = 0,
    /// Towards +z
    Down = 1,
    /// Towards -x
    Left = 2,
    /// Towards +x
    Right = 3,
}

impl Direction {
    /// All directions in the order the tick applies them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Bit for this direction inside an [`InputFrame`].
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Physical control keys the game listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    /// `w`
    W = 0,
    /// `s`
    S = 1,
    /// `a`
    A = 2,
    /// `d`
    D = 3,
    /// `ArrowUp`
    ArrowUp = 4,
    /// `ArrowDown`
    ArrowDown = 5,
    /// `ArrowLeft`
    ArrowLeft = 6,
    /// `ArrowRight`
    ArrowRight = 7,
}

/// Key → direction lookup table.
pub static KEY_BINDINGS: [(Key, Direction); 8] = [
    (Key::W, Direction::Up),
    (Key::ArrowUp, Direction::Up),
    (Key::S, Direction::Down),
    (Key::ArrowDown, Direction::Down),
    (Key::A, Direction::Left),
    (Key::ArrowLeft, Direction::Left),
    (Key::D, Direction::Right),
    (Key::ArrowRight, Direction::Right),
];

impl Key {
    /// Parse a browser-style key identifier (`KeyboardEvent.key`).
    ///
    /// Letters match case-insensitively, so Shift+W still moves up.
    pub fn from_identifier(identifier: &str) -> Option<Key> {
        match identifier {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            letter if letter.eq_ignore_ascii_case("w") => Some(Key::W),
            letter if letter.eq_ignore_ascii_case("s") => Some(Key::S),
            letter if letter.eq_ignore_ascii_case("a") => Some(Key::A),
            letter if letter.eq_ignore_ascii_case("d") => Some(Key::D),
            _ => None,
        }
    }

    /// Direction this key drives.
    pub fn direction(self) -> Direction {
        match self {
            Key::W | Key::ArrowUp => Direction::Up,
            Key::S | Key::ArrowDown => Direction::Down,
            Key::A | Key::ArrowLeft => Direction::Left,
            Key::D | Key::ArrowRight => Direction::Right,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

// =============================================================================
// INPUT FRAME
// =============================================================================

/// Held directions for a single tick.
///
/// Bit `n` is set when `Direction` with discriminant `n` is held.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFrame {
    /// Packed direction bits
    pub bits: u8,
}

impl InputFrame {
    /// Frame with nothing held.
    pub const IDLE: Self = Self { bits: 0 };

    /// Frame holding exactly the given directions.
    pub fn holding(directions: &[Direction]) -> Self {
        let bits = directions.iter().fold(0, |acc, d| acc | d.bit());
        Self { bits }
    }

    /// Check if a direction is held.
    #[inline]
    pub fn is_held(&self, direction: Direction) -> bool {
        self.bits & direction.bit() != 0
    }

    /// Check if this is an idle frame.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.bits == 0
    }

    /// Held directions, in tick order.
    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.is_held(*d))
    }
}

impl fmt::Debug for InputFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.held()).finish()
    }
}

// =============================================================================
// INPUT STATE
// =============================================================================

/// Level-triggered keyboard state.
///
/// Tracks each physical key separately: releasing `W` while `ArrowUp` is
/// still down keeps `Up` held.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held_keys: u8,
    any_key_pressed: bool,
}

impl InputState {
    /// Create with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event.
    ///
    /// `key` is `None` for keys the game does not bind. Returns `true` for
    /// the first key-down of the session, which dismisses the instructions.
    pub fn key_down(&mut self, key: Option<Key>) -> bool {
        if let Some(key) = key {
            self.held_keys |= key.bit();
        }
        let first = !self.any_key_pressed;
        self.any_key_pressed = true;
        first
    }

    /// Handle a key-up event.
    pub fn key_up(&mut self, key: Option<Key>) {
        if let Some(key) = key {
            self.held_keys &= !key.bit();
        }
    }

    /// [`key_down`](Self::key_down) from a raw key identifier.
    pub fn key_down_identifier(&mut self, identifier: &str) -> bool {
        self.key_down(Key::from_identifier(identifier))
    }

    /// [`key_up`](Self::key_up) from a raw key identifier.
    pub fn key_up_identifier(&mut self, identifier: &str) {
        self.key_up(Key::from_identifier(identifier))
    }

    /// Check if any key bound to `direction` is held.
    pub fn is_held(&self, direction: Direction) -> bool {
        KEY_BINDINGS
            .iter()
            .any(|(key, d)| *d == direction && self.held_keys & key.bit() != 0)
    }

    /// Whether any key has been pressed this session.
    pub fn instructions_dismissed(&self) -> bool {
        self.any_key_pressed
    }

    /// Snapshot the held directions for the next tick.
    pub fn frame(&self) -> InputFrame {
        let bits = Direction::ALL
            .into_iter()
            .filter(|d| self.is_held(*d))
            .fold(0, |acc, d| acc | d.bit());
        InputFrame { bits }
    }

    /// Release every key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.held_keys = 0;
    }
}

// =============================================================================
// INPUT RECORDING
// =============================================================================

/// Input change at a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDelta {
    /// Tick when this input state began
    pub tick: u64,
    /// The new input state
    pub frame: InputFrame,
}

/// Delta-compressed input capture for replay.
///
/// Only ticks where the frame changed are stored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputRecording {
    deltas: Vec<InputDelta>,
    ticks: u64,
}

impl InputRecording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the frame used for the next tick.
    pub fn record(&mut self, frame: InputFrame) {
        let changed = self.deltas.last().map_or(true, |last| last.frame != frame);
        if changed {
            self.deltas.push(InputDelta {
                tick: self.ticks,
                frame,
            });
        }
        self.ticks += 1;
    }

    /// Number of ticks recorded.
    pub fn len(&self) -> u64 {
        self.ticks
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ticks == 0
    }

    /// Stored change points.
    pub fn deltas(&self) -> &[InputDelta] {
        &self.deltas
    }

    /// Frame in effect at `tick` (0-based). Idle past the end.
    pub fn frame_at(&self, tick: u64) -> InputFrame {
        if tick >= self.ticks {
            return InputFrame::IDLE;
        }
        let idx = self.deltas.partition_point(|d| d.tick <= tick);
        idx.checked_sub(1)
            .map(|i| self.deltas[i].frame)
            .unwrap_or(InputFrame::IDLE)
    }

    /// Expand back to one frame per tick.
    pub fn frames(&self) -> impl Iterator<Item = InputFrame> + '_ {
        (0..self.ticks).map(move |t| self.frame_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_table() {
        assert_eq!(Key::from_identifier("w"), Some(Key::W));
        assert_eq!(Key::from_identifier("W"), Some(Key::W));
        assert_eq!(Key::from_identifier("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_identifier("arrowleft"), None);
        assert_eq!(Key::from_identifier("Shift"), None);

        assert_eq!(Key::W.direction(), Direction::Up);
        assert_eq!(Key::ArrowDown.direction(), Direction::Down);
        assert_eq!(Key::A.direction(), Direction::Left);
        assert_eq!(Key::ArrowRight.direction(), Direction::Right);
    }

    #[test]
    fn test_binding_table_matches_key_direction() {
        for (key, direction) in KEY_BINDINGS.iter() {
            assert_eq!(key.direction(), *direction, "{key:?}");
        }
    }

    #[test]
    fn test_level_triggered_hold() {
        let mut input = InputState::new();
        assert!(!input.is_held(Direction::Up));

        input.key_down_identifier("w");
        assert!(input.is_held(Direction::Up));

        // Repeats change nothing
        input.key_down_identifier("w");
        input.key_up_identifier("w");
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn test_two_keys_same_direction() {
        let mut input = InputState::new();
        input.key_down(Some(Key::W));
        input.key_down(Some(Key::ArrowUp));
        input.key_up(Some(Key::W));
        assert!(input.is_held(Direction::Up));

        input.key_up(Some(Key::ArrowUp));
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn test_first_key_dismisses_instructions_once() {
        let mut input = InputState::new();
        assert!(!input.instructions_dismissed());

        // Unbound keys count too
        assert!(input.key_down_identifier("Enter"));
        assert!(input.instructions_dismissed());
        assert!(!input.key_down_identifier("d"));
    }

    #[test]
    fn test_frame_snapshot() {
        let mut input = InputState::new();
        input.key_down(Some(Key::ArrowUp));
        input.key_down(Some(Key::D));

        let frame = input.frame();
        assert_eq!(frame, InputFrame::holding(&[Direction::Up, Direction::Right]));
        assert_eq!(
            frame.held().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Right]
        );

        input.release_all();
        assert!(input.frame().is_idle());
    }

    #[test]
    fn test_recording_compresses_runs() {
        let up = InputFrame::holding(&[Direction::Up]);
        let mut recording = InputRecording::new();
        for _ in 0..10 {
            recording.record(up);
        }
        for _ in 0..5 {
            recording.record(InputFrame::IDLE);
        }

        assert_eq!(recording.len(), 15);
        assert_eq!(recording.deltas().len(), 2);
        assert_eq!(recording.frame_at(0), up);
        assert_eq!(recording.frame_at(9), up);
        assert_eq!(recording.frame_at(10), InputFrame::IDLE);
        assert_eq!(recording.frame_at(99), InputFrame::IDLE);

        let expanded: Vec<InputFrame> = recording.frames().collect();
        assert_eq!(expanded.len(), 15);
        assert!(expanded[..10].iter().all(|f| *f == up));
    }

    #[test]
    fn test_recording_survives_json_then_keeps_recording() {
        let up = InputFrame::holding(&[Direction::Up]);
        let mut live = InputRecording::new();
        live.record(up);

        let json = serde_json::to_string(&live).unwrap();
        let mut restored: InputRecording = serde_json::from_str(&json).unwrap();

        live.record(InputFrame::IDLE);
        restored.record(InputFrame::IDLE);

        assert_eq!(restored.frame_at(1), InputFrame::IDLE);
        assert_eq!(restored.deltas(), live.deltas());
        assert_eq!(restored.len(), 2);
    }
}
