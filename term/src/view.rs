use minesweep_core as game;
use std::fmt::Write;

use crate::settings::GlyphStyle;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewCellState {
    Hidden,
    Revealed(u8),
    Flagged,
    TriggeredMine,
    Mine,
}

impl ViewCellState {
    /// Flags are drawn over everything else, even a revealed mine after a loss.
    pub(crate) fn from_snapshot(snapshot: &game::Snapshot, coords: game::Coord2) -> Self {
        let Some(cell) = snapshot.cell_at(coords) else {
            return Self::Hidden;
        };

        if cell.flagged {
            return Self::Flagged;
        }

        if !cell.revealed {
            return Self::Hidden;
        }

        match cell.mine {
            Some(true) if snapshot.triggered_mine == Some(coords) => Self::TriggeredMine,
            Some(true) => Self::Mine,
            _ => Self::Revealed(cell.neighbor_mines.unwrap_or(0)),
        }
    }

    pub(crate) fn glyph(self, style: GlyphStyle) -> String {
        use ViewCellState::*;

        match (style, self) {
            (GlyphStyle::Ascii, Hidden) => "#".to_string(),
            (GlyphStyle::Ascii, Revealed(0)) => ".".to_string(),
            (GlyphStyle::Ascii, Flagged) => "F".to_string(),
            (GlyphStyle::Ascii, TriggeredMine) => "X".to_string(),
            (GlyphStyle::Ascii, Mine) => "*".to_string(),
            (GlyphStyle::Emoji, Hidden) => "⬜".to_string(),
            (GlyphStyle::Emoji, Revealed(0)) => "  ".to_string(),
            (GlyphStyle::Emoji, Flagged) => "🚩".to_string(),
            (GlyphStyle::Emoji, TriggeredMine) => "💥".to_string(),
            (GlyphStyle::Emoji, Mine) => "💣".to_string(),
            (GlyphStyle::Ascii, Revealed(count)) => count.to_string(),
            (GlyphStyle::Emoji, Revealed(count)) => format!("{count} "),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Face {
    Smile,
    Cool,
    Dead,
}

impl Face {
    pub(crate) const fn for_state(state: game::GameState) -> Self {
        use game::GameState::*;
        match state {
            Playing => Self::Smile,
            Won => Self::Cool,
            Lost => Self::Dead,
        }
    }

    pub(crate) const fn icon(self, style: GlyphStyle) -> &'static str {
        match (style, self) {
            (GlyphStyle::Ascii, Self::Smile) => ":)",
            (GlyphStyle::Ascii, Self::Cool) => "B)",
            (GlyphStyle::Ascii, Self::Dead) => "X(",
            (GlyphStyle::Emoji, Self::Smile) => "😊",
            (GlyphStyle::Emoji, Self::Cool) => "😎",
            (GlyphStyle::Emoji, Self::Dead) => "😵",
        }
    }
}

pub(crate) const fn status_message(state: game::GameState) -> &'static str {
    use game::GameState::*;
    match state {
        Playing => "Reveal a cell with `r ROW COL`, flag it with `f ROW COL`.",
        Won => "Congratulations! You cleared the board!",
        Lost => "Game over! You hit a mine.",
    }
}

pub(crate) fn format_for_counter(num: i32) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

/// Draws counters, face, status message and the grid with 1-based row and column labels.
pub(crate) fn render(snapshot: &game::Snapshot, style: GlyphStyle) -> String {
    let cell_width = match style {
        GlyphStyle::Ascii => 1,
        GlyphStyle::Emoji => 2,
    };
    let mines_left = format_for_counter(snapshot.mines_left.into());
    let elapsed = format_for_counter(snapshot.elapsed_secs.try_into().unwrap_or(i32::MAX));
    let face = Face::for_state(snapshot.state).icon(style);

    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{mines_left}  {face}  {elapsed}");

    let _ = write!(out, "    ");
    for col in 1..=snapshot.cols {
        let _ = write!(out, "{:>width$}", col % 10, width = cell_width);
    }
    out.push('\n');

    for row in 0..snapshot.rows {
        let _ = write!(out, "{:>3} ", row + 1);
        for col in 0..snapshot.cols {
            let glyph = ViewCellState::from_snapshot(snapshot, (row, col)).glyph(style);
            out.push_str(&glyph);
        }
        out.push('\n');
    }

    out.push_str(status_message(snapshot.state));
    out.push('\n');
    out
}
