use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states are terminal until the session is reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// One game from first reveal to win or loss.
///
/// Mines are placed lazily: the board starts empty and the first accepted reveal picks the layout around the clicked
/// cell, so that cell always opens as a blank and cascades.
#[derive(Clone, Debug)]
pub struct Session<G = RandomLayoutGenerator> {
    config: GameConfig,
    board: Array2<Cell>,
    state: GameState,
    first_click_pending: bool,
    flag_count: CellCount,
    revealed_safe: CellCount,
    triggered_mine: Option<Coord2>,
    clock: Clock,
    generator: G,
}

impl Session<RandomLayoutGenerator> {
    /// Session whose boards are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomLayoutGenerator::from_seed(seed))
    }
}

impl<G: LayoutGenerator> Session<G> {
    pub fn initialize(rows: Coord, cols: Coord, mines: CellCount, generator: G) -> Result<Self> {
        Self::new(GameConfig::new_unchecked(rows, cols, mines), generator)
    }

    pub fn new(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            board: Array2::default(config.size().to_nd_index()),
            state: GameState::default(),
            first_click_pending: true,
            flag_count: 0,
            revealed_safe: 0,
            triggered_mine: None,
            clock: Clock::new(),
            generator,
        })
    }

    /// Starts over with an empty board, keeping the config and the generator.
    pub fn reset(&mut self) {
        self.clock.stop();
        self.board = Array2::default(self.config.size().to_nd_index());
        self.state = GameState::default();
        self.first_click_pending = true;
        self.flag_count = 0;
        self.revealed_safe = 0;
        self.triggered_mine = None;
        self.clock = Clock::new();
        log::debug!("New game on a {}x{} board", self.config.rows, self.config.cols);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn first_click_pending(&self) -> bool {
        self.first_click_pending
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Value for the remaining-mines counter; flags are capped so this never underflows.
    pub fn mines_left(&self) -> CellCount {
        self.config.mines.saturating_sub(self.flag_count)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Full engine-side view of a cell, mine included. Out of bounds gives `None`.
    ///
    /// Kept inside the crate: outside callers go through [`Snapshot`], which hides unrevealed cells.
    pub(crate) fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.config
            .contains(coords)
            .then(|| self.board[coords.to_nd_index()])
    }

    /// Periodic 1-second callback from the presentation layer.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    pub fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() || !self.config.contains(coords) {
            return RevealOutcome::NoChange;
        }

        if self.board[coords.to_nd_index()].blocks_reveal() {
            return RevealOutcome::NoChange;
        }

        if self.first_click_pending {
            if let Err(err) = self.place_mines(coords) {
                log::error!("Mine placement around {:?} failed: {}", coords, err);
                return RevealOutcome::NoChange;
            }
            self.compute_neighbor_counts();
            self.clock.start();
            self.first_click_pending = false;
        }

        if self.flood_reveal(coords) {
            return RevealOutcome::HitMine;
        }

        if self.evaluate_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_finished() || !self.config.contains(coords) {
            return FlagOutcome::NoChange;
        }

        let cell = &mut self.board[coords.to_nd_index()];
        let outcome = if cell.is_revealed {
            FlagOutcome::NoChange
        } else if cell.is_flagged {
            cell.is_flagged = false;
            self.flag_count -= 1;
            FlagOutcome::Changed
        } else if self.flag_count < self.config.mines {
            cell.is_flagged = true;
            self.flag_count += 1;
            FlagOutcome::Changed
        } else {
            log::debug!("Flag limit of {} reached, ignoring {:?}", self.config.mines, coords);
            FlagOutcome::NoChange
        };

        self.evaluate_win();
        outcome
    }

    /// Marks `config.mines` cells as mines, keeping `exclude` and its neighbors clear.
    pub fn place_mines(&mut self, exclude: Coord2) -> Result<()> {
        let mines = self.generator.generate(&self.config, exclude)?;
        for pos in mines {
            self.board[pos.to_nd_index()].is_mine = true;
        }
        Ok(())
    }

    pub fn compute_neighbor_counts(&mut self) {
        let (rows, cols) = self.config.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self.board[coords.to_nd_index()].is_mine {
                    continue;
                }
                let count = self
                    .board
                    .iter_neighbors(coords)
                    .filter(|pos| self.board[pos.to_nd_index()].is_mine)
                    .count();
                // at most 8 neighbors
                self.board[coords.to_nd_index()].neighbor_mines = count as u8;
            }
        }
    }

    /// Transitions to `Won` once every safe cell is open. Returns whether that happened on this call.
    pub fn evaluate_win(&mut self) -> bool {
        if self.state.is_finished() || self.first_click_pending {
            return false;
        }

        if self.revealed_safe < self.config.safe_cells() {
            return false;
        }

        self.end_game(true);
        true
    }

    /// Reveals `start` and, through blank cells, everything connected to it. Returns whether a mine was hit.
    fn flood_reveal(&mut self, start: Coord2) -> bool {
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.board[coords.to_nd_index()];
            if cell.blocks_reveal() {
                continue;
            }

            cell.is_revealed = true;

            if cell.is_mine {
                log::debug!("Hit mine at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.end_game(false);
                return true;
            }

            self.revealed_safe += 1;
            let neighbor_mines = cell.neighbor_mines;
            log::trace!("Revealed {:?}, neighbor mines: {}", coords, neighbor_mines);

            if neighbor_mines == 0 {
                let board = &self.board;
                to_visit.extend(
                    board
                        .iter_neighbors(coords)
                        .filter(|pos| !board[pos.to_nd_index()].blocks_reveal()),
                );
            }
        }

        false
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.clock.stop();

        if won {
            self.state = GameState::Won;
            for cell in self.board.iter_mut().filter(|cell| cell.is_mine) {
                cell.is_flagged = true;
            }
            self.flag_count = self.config.mines;
        } else {
            self.state = GameState::Lost;
            // flags stay as placed, misflagged safe cells included
            for cell in self.board.iter_mut().filter(|cell| cell.is_mine) {
                cell.is_revealed = true;
            }
        }

        log::debug!(
            "Game ended: {:?} after {}s",
            self.state,
            self.clock.elapsed_secs()
        );
    }
}
