//! Coin Scramble entry point
//!
//! Headless demo runner: loads a level, then advances the simulation at a
//! fixed timestep with scripted input and logs what happens. A windowed
//! build would drive the same `tick` from its frame loop and hand the
//! entity data to a renderer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use coin_scramble::consts::{FIXED_TIMESTEP, MAX_TIMESTEPS};
use coin_scramble::map::Level;
use coin_scramble::settings::Settings;
use coin_scramble::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() -> Result<()> {
    env_logger::init();

    let map_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/flaremap.txt"));
    let seconds: f32 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10.0);

    let settings = Settings::load(Path::new("settings.json"));
    let text = std::fs::read_to_string(&map_path)
        .with_context(|| format!("reading map {}", map_path.display()))?;
    let level = Level::from_text(&text, &settings)
        .with_context(|| format!("parsing map {}", map_path.display()))?;

    let mut state = GameState::new(&level, settings);
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    // Stand in for wall-clock frames with a 30 Hz cadence; each frame
    // folds into fixed steps exactly as a windowed loop would
    let frame_dt = 1.0 / 30.0;
    let total_frames = (seconds / frame_dt).ceil() as u32;
    let mut accumulator = 0.0_f32;

    log::info!(
        "Running {} frames ({}s) of {}",
        total_frames,
        seconds,
        map_path.display(),
    );

    'frames: for _ in 0..total_frames {
        accumulator += frame_dt;
        let mut steps = 0;
        while accumulator >= FIXED_TIMESTEP && steps < MAX_TIMESTEPS {
            let t = state.time_ticks;
            input.move_right = true;
            input.jump = t % 90 == 0;
            tick(&mut state, &input, FIXED_TIMESTEP);
            accumulator -= FIXED_TIMESTEP;
            steps += 1;

            // Clear one-shot inputs after processing
            input.start = false;

            for event in state.drain_events() {
                match event {
                    GameEvent::CoinCollected { id } => {
                        log::info!("tick {}: collected coin {}", state.time_ticks, id);
                    }
                    GameEvent::LevelCleared => {
                        log::info!("tick {}: level cleared", state.time_ticks);
                    }
                }
            }

            if state.time_ticks % 60 == 0 {
                let pos = state.player.transform.position;
                let (grid_x, grid_y) = coin_scramble::world_to_grid(
                    pos.truncate() - state.settings.origin_shift,
                    state.settings.tile_size,
                );
                log::debug!(
                    "tick {}: player at ({:.3}, {:.3}) cell ({}, {}), {} coin(s) left",
                    state.time_ticks,
                    pos.x,
                    pos.y,
                    grid_x,
                    grid_y,
                    state.coins_remaining(),
                );
            }

            if state.phase == GamePhase::Cleared {
                break 'frames;
            }
        }
    }

    log::info!(
        "Done after {} ticks: score {}, {} coin(s) left",
        state.time_ticks,
        state.score,
        state.coins_remaining(),
    );
    Ok(())
}
