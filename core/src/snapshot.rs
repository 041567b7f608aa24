use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the presentation layer may see of a single cell.
///
/// `mine` and `neighbor_mines` stay `None` on unrevealed cells while the game is still being played.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub revealed: bool,
    pub flagged: bool,
    pub mine: Option<bool>,
    pub neighbor_mines: Option<u8>,
}

/// Read-only copy of everything needed to draw a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: Coord,
    pub cols: Coord,
    pub mine_count: CellCount,
    pub flag_count: CellCount,
    pub mines_left: CellCount,
    pub elapsed_secs: u32,
    pub state: GameState,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellSnapshot>,
}

impl Snapshot {
    pub fn from_session<G: LayoutGenerator>(session: &Session<G>) -> Self {
        let (rows, cols) = session.size();
        let finished = session.is_finished();
        let mut cells = Array2::default((rows, cols).to_nd_index());

        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let Some(cell) = session.cell(coords) else {
                    continue;
                };
                let visible = cell.is_revealed || finished;
                cells[coords.to_nd_index()] = CellSnapshot {
                    revealed: cell.is_revealed,
                    flagged: cell.is_flagged,
                    mine: visible.then_some(cell.is_mine),
                    neighbor_mines: (visible && !cell.is_mine).then_some(cell.neighbor_mines),
                };
            }
        }

        Self {
            rows,
            cols,
            mine_count: session.total_mines(),
            flag_count: session.flag_count(),
            mines_left: session.mines_left(),
            elapsed_secs: session.elapsed_secs(),
            state: session.state(),
            triggered_mine: session.triggered_mine(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellSnapshot> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl<G: LayoutGenerator> Session<G> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }
}
