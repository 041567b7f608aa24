use serde::{Deserialize, Serialize};

use crate::*;

/// Largest exclusion zone around the first reveal: the cell plus its 8 neighbors.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks that the board is non-empty and leaves at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidSize);
        }

        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }

        if self.mines > self.max_zero_start_mines() {
            log::warn!(
                "{} mines on a {}x{} board may not leave room for a zero-hint first reveal",
                self.mines,
                self.rows,
                self.cols
            );
        }

        Ok(())
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        // 255 * 255 still fits a `CellCount`
        (self.rows as CellCount) * (self.cols as CellCount)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Mine count that still fits when the exclusion zone is at its largest.
    pub const fn max_zero_start_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(SAFE_ZONE_CELLS)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
