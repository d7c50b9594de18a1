//! Tile grid storage
//!
//! A single flat row-major buffer with bounds-checked access. Index 0 is
//! the empty cell; anything non-zero is solid level geometry.

use serde::{Deserialize, Serialize};

/// Tile indices for one rectangular layer, row-major from the top-left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl TileGrid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile index at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Write a cell; out-of-range coordinates are ignored
    pub(crate) fn set(&mut self, x: usize, y: usize, value: u32) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }

    /// Whether the cell holds solid geometry
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|v| v != 0)
    }

    /// Non-empty cells in row-major order as `(x, y, index)`
    pub fn iter_solid(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.cells[y * self.width + x])))
            .filter(|&(_, _, index)| index != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), Some(0));
                assert!(!grid.is_solid(x, y));
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.is_solid(100, 100));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(2, 1, 7);
        assert_eq!(grid.get(2, 1), Some(7));
        assert!(grid.is_solid(2, 1));
        // Out-of-range writes are dropped
        grid.set(9, 9, 7);
        assert_eq!(grid.get(9, 9), None);
    }

    #[test]
    fn test_iter_solid_row_major() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(2, 0, 1);
        grid.set(0, 1, 2);
        grid.set(1, 1, 3);
        let cells: Vec<_> = grid.iter_solid().collect();
        assert_eq!(cells, vec![(2, 0, 1), (0, 1, 2), (1, 1, 3)]);
    }
}
