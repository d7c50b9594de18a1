//! Game state and level materialization
//!
//! All simulation state lives in one explicit `GameState` value,
//! constructed at level setup and owned by the caller. Nothing here is
//! global; two states can simulate side by side.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::sprite::{COIN_FRAME_INDEX, ENTITY_FRAME_SIZE, PLAYER_FRAME_INDEX, SpriteFrame};
use crate::grid_to_world;
use crate::map::Level;
use crate::settings::Settings;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level is built but not simulating yet
    MainMenu,
    /// Active play
    Level,
    /// Every coin has been collected
    Cleared,
}

/// Things the caller (renderer, audio) may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { id: u32 },
    LevelCleared,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub settings: Settings,
    pub player: Entity,
    /// Static level geometry in row-major placement order
    pub tiles: Vec<Entity>,
    /// Collectibles in file order
    pub coins: Vec<Entity>,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the caller last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a playable state from a loaded level
    ///
    /// Every non-zero grid cell becomes a static tile entity; coins and
    /// the player spawn come from the object layer. Entity ids allocate
    /// monotonically so iteration order is stable and deterministic.
    pub fn new(level: &Level, settings: Settings) -> Self {
        let mut next_id: u32 = 1;

        let player_frame = SpriteFrame::from_index(PLAYER_FRAME_INDEX, ENTITY_FRAME_SIZE);
        let mut player = Entity::new(next_id, EntityKind::Player, player_frame);
        next_id += 1;
        player.transform.size = Vec3::new(2.0, 1.0, 1.0);
        player.transform.acceleration.y = settings.gravity;
        if let Some(spawn) = level.spawn {
            player.transform.position = spawn;
        }

        let mut tiles = Vec::new();
        for (x, y, index) in level.grid.iter_solid() {
            let frame = SpriteFrame::from_index(index, ENTITY_FRAME_SIZE);
            let mut tile = Entity::new(next_id, EntityKind::Tile { index }, frame);
            next_id += 1;
            tile.transform.size = Vec3::new(2.0, 1.0, 1.0);
            tile.transform.position =
                grid_to_world(x as i32, y as i32, settings.tile_size, settings.origin_shift)
                    .extend(0.0);
            tile.is_static = true;
            tiles.push(tile);
        }

        let coin_frame = SpriteFrame::from_index(COIN_FRAME_INDEX, ENTITY_FRAME_SIZE);
        let mut coins = Vec::new();
        for &position in &level.coins {
            let mut coin = Entity::new(next_id, EntityKind::Coin, coin_frame);
            next_id += 1;
            coin.transform.size = Vec3::new(2.0, 1.0, 1.0);
            coin.transform.position = position;
            coin.is_static = true;
            coins.push(coin);
        }

        log::info!("Level ready: {} tiles, {} coins", tiles.len(), coins.len());

        Self {
            phase: GamePhase::MainMenu,
            settings,
            player,
            tiles,
            coins,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id,
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Leave the menu and begin play
    pub fn start(&mut self) {
        if self.phase == GamePhase::MainMenu {
            self.phase = GamePhase::Level;
        }
    }

    /// Drop entities marked dead during the last sweep, preserving order
    pub(crate) fn compact(&mut self) {
        self.coins.retain(|coin| coin.alive);
    }

    /// Coins still waiting to be collected
    pub fn coins_remaining(&self) -> usize {
        self.coins.len()
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileGrid;

    fn level_3x2() -> Level {
        // Grid: solid at (2,0) and (1,1), spawn and two coins placed
        let mut grid = TileGrid::new(3, 2);
        grid.set(2, 0, 1);
        grid.set(1, 1, 2);
        Level {
            grid,
            spawn: Some(Vec3::new(-1.637, 0.79, 0.0)),
            coins: vec![Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.2, 0.5, 0.0)],
        }
    }

    #[test]
    fn test_materialization_counts_and_order() {
        let state = GameState::new(&level_3x2(), Settings::default());
        assert_eq!(state.tiles.len(), 2);
        assert_eq!(state.coins.len(), 2);
        assert_eq!(state.phase, GamePhase::MainMenu);

        // Row-major tile order: (2,0) before (1,1)
        let first = &state.tiles[0];
        let second = &state.tiles[1];
        assert_eq!(first.kind, EntityKind::Tile { index: 1 });
        assert_eq!(second.kind, EntityKind::Tile { index: 2 });
        assert!(first.transform.position.y > second.transform.position.y);
        assert!(first.is_static && second.is_static);
    }

    #[test]
    fn test_tile_world_placement() {
        let state = GameState::new(&level_3x2(), Settings::default());
        let tile = &state.tiles[0]; // grid (2, 0)
        assert!((tile.transform.position.x - (2.0 * 0.07 - 1.777)).abs() < 1e-6);
        assert!((tile.transform.position.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_player_spawn_and_gravity() {
        let settings = Settings::default();
        let state = GameState::new(&level_3x2(), settings.clone());
        assert_eq!(state.player.kind, EntityKind::Player);
        assert_eq!(state.player.transform.position, Vec3::new(-1.637, 0.79, 0.0));
        assert_eq!(state.player.transform.acceleration.y, settings.gravity);
        assert!(!state.player.is_static);
    }

    #[test]
    fn test_entity_ids_unique_and_monotonic() {
        let mut state = GameState::new(&level_3x2(), Settings::default());
        let mut ids = vec![state.player.id];
        ids.extend(state.tiles.iter().map(|t| t.id));
        ids.extend(state.coins.iter().map(|c| c.id));
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
        assert!(state.next_entity_id() > *ids.iter().max().unwrap());
    }

    #[test]
    fn test_compact_preserves_survivor_order() {
        let mut state = GameState::new(&level_3x2(), Settings::default());
        let survivor = state.coins[1].id;
        state.coins[0].alive = false;
        state.compact();
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins[0].id, survivor);
    }

    #[test]
    fn test_drain_events_empties_the_queue() {
        let mut state = GameState::new(&level_3x2(), Settings::default());
        state.events.push(GameEvent::CoinCollected { id: 9 });
        let drained = state.drain_events();
        assert_eq!(drained, vec![GameEvent::CoinCollected { id: 9 }]);
        assert!(state.events.is_empty());
    }
}
