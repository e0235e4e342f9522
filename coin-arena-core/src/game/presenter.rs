//! Presentation Boundary
//!
//! The game loop never touches a renderer. A [`Presenter`] receives the
//! events of each tick through [`present`], then draws the frame.

use tracing::info;

use crate::game::events::{GameEvent, GameEventData};
use crate::game::state::GameState;

/// Something that can show the game.
pub trait Presenter {
    /// Draw the current state.
    fn render_frame(&mut self, state: &GameState);

    /// Update the score display.
    fn update_score(&mut self, collected: u32, total: u32);

    /// Show the win screen.
    fn show_win_state(&mut self);

    /// Hide the start-of-session instructions.
    fn hide_instructions(&mut self);
}

/// Dispatch a tick's events to `presenter`, then render.
pub fn present<P: Presenter + ?Sized>(presenter: &mut P, state: &GameState, events: &[GameEvent]) {
    for event in events {
        match &event.data {
            GameEventData::ScoreChanged { collected, total } => {
                presenter.update_score(*collected, *total);
            }
            GameEventData::GameWon { .. } => presenter.show_win_state(),
            GameEventData::CoinCollected { .. } | GameEventData::AvatarMoved { .. } => {}
        }
    }
    presenter.render_frame(state);
}

/// Presenter that writes to the tracing log.
///
/// Frames are not logged individually; `frames` counts them.
#[derive(Debug, Default)]
pub struct TracingPresenter {
    /// Frames rendered so far
    pub frames: u64,
}

impl Presenter for TracingPresenter {
    fn render_frame(&mut self, _state: &GameState) {
        self.frames += 1;
    }

    fn update_score(&mut self, collected: u32, total: u32) {
        info!("Coins: {}/{}", collected, total);
    }

    fn show_win_state(&mut self) {
        info!("You win! Every coin collected.");
    }

    fn hide_instructions(&mut self) {
        info!("Instructions hidden");
    }
}
