//! Coin Arena Headless Simulation
//!
//! Plays one session without a window: a scripted sweep of the spawn
//! square drives the avatar, a tracing presenter stands in for the
//! renderer, and the recorded input is replayed to check determinism.
//!
//! Usage: `coin-arena-sim [config.json] [seed]`

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coin_arena::{
    GameConfig, GameState, InputRecording, InputState, TICK_RATE, VERSION,
    game::{
        presenter::{present, Presenter, TracingPresenter},
        tick::{replay, tick},
    },
};

/// Default layout seed.
const DEFAULT_SEED: u64 = 12345;

/// Give up after this many simulated seconds.
const MAX_SECONDS: u64 = 600;

/// Distance between sweep rows, in world units.
const ROW_SPACING: f64 = 1.5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config from {path}"))?,
        None => GameConfig::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>().with_context(|| format!("invalid seed `{raw}`"))?,
        None => DEFAULT_SEED,
    };

    info!("Coin Arena Sim v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    run_session(&config, seed)
}

/// Play a scripted session and verify it replays identically.
fn run_session(config: &GameConfig, seed: u64) -> Result<()> {
    info!("=== Starting Session ===");
    info!("RNG Seed: {}", seed);

    let tuning = config.tuning();
    let mut state = GameState::new(seed, config);
    let mut input = InputState::new();
    let mut recording = InputRecording::new();
    let mut presenter = TracingPresenter::default();

    for obstacle in &state.arena.obstacles {
        info!("Obstacle at {}", obstacle.position);
    }
    for coin in &state.coins {
        info!("Coin {} at {}", coin.id, coin.position);
    }
    presenter.update_score(0, state.total_coins());

    let max_ticks = MAX_SECONDS * u64::from(TICK_RATE);

    'script: for (key, hold_ticks) in sweep_script(config) {
        if input.key_down_identifier(key) {
            presenter.hide_instructions();
        }
        for _ in 0..hold_ticks {
            if state.won || state.tick >= max_ticks {
                break 'script;
            }
            let frame = input.frame();
            recording.record(frame);
            let result = tick(&mut state, frame, &tuning);
            present(&mut presenter, &state, &result.events);
        }
        input.key_up_identifier(key);
    }

    info!("=== Session Results ===");
    info!(
        "Ticks: {} ({} input changes), frames rendered: {}",
        state.tick,
        recording.deltas().len(),
        presenter.frames
    );
    info!("Coins: {}/{}", state.collected_coins, state.total_coins());
    if !state.won {
        warn!("Sweep finished without collecting every coin");
    }

    let hash = state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    info!("=== Verifying Determinism ===");
    let (replayed, events) = replay(seed, config, &recording, recording.len());
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {} ({} events)", hex::encode(replay_hash), events.len());

    if hash != replay_hash {
        bail!("determinism failure: replay hash differs from live hash");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");
    Ok(())
}

/// Lawnmower path over the spawn square as (key identifier, ticks held).
///
/// Alternates letter and arrow identifiers so both bindings are exercised.
fn sweep_script(config: &GameConfig) -> Vec<(&'static str, u64)> {
    let ticks_for = |distance: f64| (distance / config.avatar_speed).ceil() as u64;
    let half = config.spawn_half_extent;
    let rows = (2.0 * half / ROW_SPACING).ceil() as u64;

    let mut script = vec![("a", ticks_for(half)), ("ArrowUp", ticks_for(half))];
    for row in 0..=rows {
        let across = if row % 2 == 0 { "ArrowRight" } else { "a" };
        script.push((across, ticks_for(2.0 * half)));
        script.push(("s", ticks_for(ROW_SPACING)));
    }
    script
}
