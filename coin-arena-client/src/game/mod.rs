//! Game module - drives the deterministic game loop from Bevy
//!
//! Keyboard events go into the core `InputState`, one core tick runs per
//! fixed step, and the tick's events come back out as [`ViewCommand`]s for
//! the UI. Scene transforms are copied from the core state every frame.

use bevy::input::keyboard::KeyboardInput;
use bevy::input::{ButtonState, InputSystem};
use bevy::prelude::*;
use bevy::window::WindowFocused;

use coin_arena::game::presenter::{present, Presenter};
use coin_arena::game::tick::tick;
use coin_arena::{GameConfig, GameState, InputState, Key as GameKey, Tuning};

pub mod components;
pub mod scene;
pub mod visuals;

pub use components::*;
pub use visuals::*;

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<ViewCommand>()

            // Scene
            .add_systems(Startup, scene::setup_scene)

            // Input is buffered before the fixed loop runs this frame
            .add_systems(PreUpdate, read_keyboard.after(InputSystem))

            // Core gameplay (fixed timestep, one core tick per step)
            .add_systems(FixedUpdate, run_tick)

            // Visual updates (variable timestep)
            .add_systems(Update, (
                sync_avatar,
                sync_coins,
                camera_follow,
            ).chain());
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

/// The running session.
#[derive(Resource)]
pub struct Simulation {
    pub state: GameState,
    pub input: InputState,
    pub tuning: Tuning,
}

impl Simulation {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            state: GameState::new(seed, config),
            input: InputState::new(),
            tuning: config.tuning(),
        }
    }
}

// ============================================================================
// EVENTS
// ============================================================================

/// What the UI should change, forwarded from the game loop.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    UpdateScore { collected: u32, total: u32 },
    ShowWinState,
    HideInstructions,
}

/// Presenter that turns core callbacks into Bevy events.
struct EventPresenter<'a, 'w> {
    out: &'a mut EventWriter<'w, ViewCommand>,
}

impl Presenter for EventPresenter<'_, '_> {
    fn render_frame(&mut self, _state: &GameState) {
        // Bevy renders every frame; transforms come from `sync_*`
    }

    fn update_score(&mut self, collected: u32, total: u32) {
        self.out.send(ViewCommand::UpdateScore { collected, total });
    }

    fn show_win_state(&mut self) {
        self.out.send(ViewCommand::ShowWinState);
    }

    fn hide_instructions(&mut self) {
        self.out.send(ViewCommand::HideInstructions);
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Map a physical key to a game key. Unbound keys map to `None`.
pub fn game_key(key_code: KeyCode) -> Option<GameKey> {
    match key_code {
        KeyCode::KeyW => Some(GameKey::W),
        KeyCode::KeyS => Some(GameKey::S),
        KeyCode::KeyA => Some(GameKey::A),
        KeyCode::KeyD => Some(GameKey::D),
        KeyCode::ArrowUp => Some(GameKey::ArrowUp),
        KeyCode::ArrowDown => Some(GameKey::ArrowDown),
        KeyCode::ArrowLeft => Some(GameKey::ArrowLeft),
        KeyCode::ArrowRight => Some(GameKey::ArrowRight),
        _ => None,
    }
}

/// Feed raw keyboard events into the held-key state
fn read_keyboard(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut focus_events: EventReader<WindowFocused>,
    mut sim: ResMut<Simulation>,
    mut view: EventWriter<ViewCommand>,
) {
    for event in keyboard_events.read() {
        let key = game_key(event.key_code);
        match event.state {
            ButtonState::Pressed => {
                if sim.input.key_down(key) {
                    EventPresenter { out: &mut view }.hide_instructions();
                }
            }
            ButtonState::Released => sim.input.key_up(key),
        }
    }

    // Key-ups are lost while unfocused
    for event in focus_events.read() {
        if !event.focused {
            sim.input.release_all();
        }
    }
}

// ============================================================================
// GAME LOOP
// ============================================================================

/// Run one core tick and forward its events
fn run_tick(mut sim: ResMut<Simulation>, mut view: EventWriter<ViewCommand>) {
    let sim = &mut *sim;
    let frame = sim.input.frame();
    let result = tick(&mut sim.state, frame, &sim.tuning);

    let mut presenter = EventPresenter { out: &mut view };
    present(&mut presenter, &sim.state, &result.events);
}
