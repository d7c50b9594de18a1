//! Flare-style text map loading
//!
//! The format is line-oriented ASCII. Sections open with a literal
//! bracketed header line and run until the next blank line:
//!
//! ```text
//! [header]
//! width=24
//! height=8
//!
//! [layer]
//! data=
//! 0,0,2,...      (height rows of width comma-separated values, 1-indexed)
//!
//! [ObjectsLayer]
//! type=Player
//! location=2,5
//! ```
//!
//! Parsing is single-pass and forward-only. Only a missing `width`/`height`
//! is fatal; malformed numeric tokens elsewhere fall back to `0` so a
//! sloppy map degrades instead of failing.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::grid_to_world;
use crate::map::TileGrid;
use crate::settings::Settings;

/// Failure to assemble a playable level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The `[header]` section ended without both `width` and `height`
    MissingDimensions,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::MissingDimensions => {
                write!(f, "map header is missing width and/or height")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// A parsed level: tile grid plus resolved object placements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: TileGrid,
    /// World-space player spawn, if the object layer placed one
    pub spawn: Option<Vec3>,
    /// World-space coin positions in file order
    pub coins: Vec<Vec3>,
}

impl Level {
    /// Parse level text; settings supply the tile size and origin shift
    /// used to resolve object placements into world space.
    pub fn from_text(text: &str, settings: &Settings) -> Result<Self, MapError> {
        let mut lines = text.lines();
        let mut grid: Option<TileGrid> = None;
        let mut spawn = None;
        let mut coins = Vec::new();

        while let Some(line) = lines.next() {
            match line {
                "[header]" => grid = Some(read_header(&mut lines)?),
                "[layer]" => match grid.as_mut() {
                    Some(grid) => read_layer(&mut lines, grid),
                    None => log::warn!("[layer] section before [header], skipping"),
                },
                "[ObjectsLayer]" => {
                    read_objects(&mut lines, settings, &mut spawn, &mut coins);
                }
                // Unknown top-level lines are skipped for forward compatibility
                _ => {}
            }
        }

        let grid = grid.ok_or(MapError::MissingDimensions)?;
        log::info!(
            "Loaded level: {}x{} grid, {} coins, spawn {:?}",
            grid.width(),
            grid.height(),
            coins.len(),
            spawn,
        );
        Ok(Self { grid, spawn, coins })
    }
}

/// Lenient integer parse: malformed tokens become 0
fn lenient_int(token: &str) -> i64 {
    token.trim().parse().unwrap_or(0)
}

/// Split a `key=value` line; a line without `=` yields an empty value
fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once('=') {
        Some((key, value)) => (key, value),
        None => (line, ""),
    }
}

/// Consume the `[header]` section and allocate the grid
fn read_header<'a, I>(lines: &mut I) -> Result<TileGrid, MapError>
where
    I: Iterator<Item = &'a str>,
{
    let mut width: i64 = -1;
    let mut height: i64 = -1;

    for line in lines {
        if line.is_empty() {
            break;
        }
        let (key, value) = split_key_value(line);
        match key {
            "width" => width = lenient_int(value),
            "height" => height = lenient_int(value),
            _ => {}
        }
    }

    if width == -1 || height == -1 {
        return Err(MapError::MissingDimensions);
    }
    // Degenerate dimensions clamp to an empty grid rather than failing
    Ok(TileGrid::new(width.max(0) as usize, height.max(0) as usize))
}

/// Consume a `[layer]` section, filling the grid on its `data` key
///
/// The file stores tile indices 1-based; 0 and anything unparsable are
/// empty. Short rows leave the remaining cells empty, extra columns are
/// ignored.
fn read_layer<'a, I>(lines: &mut I, grid: &mut TileGrid)
where
    I: Iterator<Item = &'a str>,
{
    while let Some(line) = lines.next() {
        if line.is_empty() {
            break;
        }
        let (key, _value) = split_key_value(line);
        if key == "data" {
            for y in 0..grid.height() {
                let Some(row) = lines.next() else { break };
                for (x, token) in row.split(',').enumerate() {
                    if x >= grid.width() {
                        break;
                    }
                    let raw = lenient_int(token);
                    let index = if raw > 0 { (raw - 1) as u32 } else { 0 };
                    grid.set(x, y, index);
                }
            }
        }
    }
}

/// Consume an `[ObjectsLayer]` section, resolving placements to world space
///
/// `type` sets a pending object type; each `location` places one object of
/// that type. A lone `Player` spawn is meaningful, so later spawns simply
/// overwrite earlier ones.
fn read_objects<'a, I>(
    lines: &mut I,
    settings: &Settings,
    spawn: &mut Option<Vec3>,
    coins: &mut Vec<Vec3>,
) where
    I: Iterator<Item = &'a str>,
{
    let mut pending_type = "";

    for line in lines {
        if line.is_empty() {
            break;
        }
        let (key, value) = split_key_value(line);
        match key {
            "type" => pending_type = value,
            "location" => {
                let mut fields = value.split(',');
                let grid_x = lenient_int(fields.next().unwrap_or(""));
                let grid_y = lenient_int(fields.next().unwrap_or(""));
                let place = grid_to_world(
                    grid_x as i32,
                    grid_y as i32,
                    settings.tile_size,
                    settings.origin_shift,
                )
                .extend(0.0);
                match pending_type {
                    "Player" => *spawn = Some(place),
                    "Coin" => coins.push(place),
                    other => {
                        if !other.is_empty() {
                            log::warn!("Ignoring object of unknown type {:?}", other);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
