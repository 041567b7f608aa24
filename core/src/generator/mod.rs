use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses where the mines go once the first reveal position is known.
pub trait LayoutGenerator {
    /// Returns exactly `config.mines` distinct positions, none of them inside the safe zone around `safe_center`.
    fn generate(&mut self, config: &GameConfig, safe_center: Coord2) -> Result<Vec<Coord2>>;
}

/// The first reveal position together with its board-clamped neighbors.
pub fn safe_zone(config: &GameConfig, center: Coord2) -> impl Iterator<Item = Coord2> {
    NeighborIter::with_center(center, config.size())
}

/// Every position on the board in row-major order.
pub(crate) fn all_positions(config: &GameConfig) -> impl Iterator<Item = Coord2> {
    let cols = config.cols;
    (0..config.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}
