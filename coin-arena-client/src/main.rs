//! Coin Arena 3D
//!
//! Walk around a small arena, dodge the red blocks and pick up every gold
//! coin. The game loop itself lives in `coin-arena-core`; this crate only
//! feeds it keyboard input and draws the result.
//!
//! Usage: `coin-arena-client [config.json]`

mod game;
mod ui;

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::WindowMode;

use anyhow::{Context, Result};

use coin_arena::{GameConfig, TICK_RATE};
use game::{GamePlugin, Simulation};
use ui::UiPlugin;

/// Sky colour (#87CEEB), also used for the fog.
pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);

/// Game states
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Playing,
    /// Every coin collected. Movement keeps working.
    Won,
}

fn main() -> Result<()> {
    let config = load_config(std::env::args().nth(1).as_deref())?;
    let seed = rand::random::<u64>();

    App::new()
        // Bevy defaults with custom window
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Coin Arena".into(),
                resolution: (1280., 720.).into(),
                mode: WindowMode::Windowed,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(SKY_COLOR))
        // One game loop tick per fixed step
        .insert_resource(Time::<Fixed>::from_hz(f64::from(TICK_RATE)))
        .insert_resource(Simulation::new(seed, &config))
        // Game state
        .init_state::<AppState>()
        // Our plugins
        .add_plugins((
            GamePlugin,
            UiPlugin,
        ))
        // Startup
        .add_systems(Startup, (setup_3d_camera, log_session))
        .run();

    Ok(())
}

/// Config from `path`, or defaults when none is given.
fn load_config(path: Option<&str>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading config from {path}")),
        None => Ok(GameConfig::default()),
    }
}

/// What `coin-arena-sim` needs to rebuild this layout.
fn session_summary(sim: &Simulation) -> String {
    format!(
        "Session seed: {} ({} coins, {} obstacles)",
        sim.state.rng_seed,
        sim.state.total_coins(),
        sim.state.arena.obstacles.len()
    )
}

fn log_session(sim: Res<Simulation>) {
    info!("{}", session_summary(&sim));
}

/// Perspective camera behind and above the avatar, with sky fog
fn setup_3d_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
        DistanceFog {
            color: SKY_COLOR,
            falloff: FogFalloff::Linear {
                start: 10.0,
                end: 50.0,
            },
            ..default()
        },
    ));

    info!("Coin Arena initialized!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_an_error() {
        let err = load_config(Some("/nonexistent/coin-arena.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/coin-arena.json"));
    }

    #[test]
    fn test_no_config_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_session_summary_names_seed() {
        let sim = Simulation::new(4242, &GameConfig::default());
        assert_eq!(session_summary(&sim), "Session seed: 4242 (10 coins, 8 obstacles)");
    }
}
