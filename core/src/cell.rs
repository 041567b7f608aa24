use serde::{Deserialize, Serialize};

/// Full per-position state owned by the engine.
///
/// `is_mine` is fixed once mines are placed, `is_revealed` only ever goes from `false` to `true`, and `is_flagged`
/// only changes while the cell is unrevealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_mines: u8,
}

impl Cell {
    /// A revealed safe cell with no adjacent mines, the seed of a flood-fill.
    pub const fn is_blank(self) -> bool {
        !self.is_mine && self.neighbor_mines == 0
    }

    /// Whether a reveal request on this cell would be absorbed.
    pub const fn blocks_reveal(self) -> bool {
        self.is_revealed || self.is_flagged
    }
}
