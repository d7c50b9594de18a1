//! Fixed timestep simulation tick
//!
//! One call advances play by one step: intents map onto the player, the
//! player integrates and is then tested against the static tile list in
//! placement order and the coin list in file order. Resolution order
//! matters and is part of the behavior, so both sweeps iterate the same
//! containers the same way every tick.

use super::state::{GameEvent, GamePhase, GameState};

/// Movement intents for a single tick, decided by the input layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// One-shot; the caller clears it once a tick has consumed it
    pub jump: bool,
    /// Leave the main menu
    pub start: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::MainMenu => {
            if input.start {
                state.start();
            }
            return;
        }
        GamePhase::Cleared => return,
        GamePhase::Level => {}
    }

    state.time_ticks += 1;

    // Held keys steer acceleration; jump is an instantaneous velocity change
    let accel = state.settings.move_acceleration;
    state.player.transform.acceleration.x = if input.move_left {
        -accel
    } else if input.move_right {
        accel
    } else {
        0.0
    };
    if input.jump {
        state.player.transform.velocity.y = state.settings.jump_speed;
    }

    let friction = state.settings.friction;
    state.player.integrate(dt, friction);

    // Static geometry first, in placement order
    for tile in &mut state.tiles {
        state.player.collides_with(tile);
    }

    // Then collectibles; contact parks the coin off-world, we mark it dead
    // and compact once after the sweep
    let mut collected: u32 = 0;
    for coin in &mut state.coins {
        if state.player.collides_with(coin) {
            coin.alive = false;
            collected += 1;
            state.events.push(GameEvent::CoinCollected { id: coin.id });
        }
    }

    if collected > 0 {
        state.score += collected;
        state.compact();
        log::debug!(
            "collected {} coin(s), {} remaining",
            collected,
            state.coins.len(),
        );
        if state.coins.is_empty() {
            state.phase = GamePhase::Cleared;
            state.events.push(GameEvent::LevelCleared);
            log::info!("Level cleared with score {}", state.score);
        }
    }
}
