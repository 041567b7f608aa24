use minesweep_core as game;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(game::Coord2),
    Flag(game::Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum ParseError {
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Usage: {0} ROW COL")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("Position {row} {col} is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: game::Coord,
        cols: game::Coord,
    },
}

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL  reveal a cell (1-based)
  f ROW COL  toggle a flag (1-based)
  n          start a new game
  h          show this help
  q          quit";

/// Parses one input line; `Ok(None)` for blank lines.
///
/// Positions are typed 1-based and checked against `size`, so the engine only ever sees in-range coordinates.
pub(crate) fn parse_command(line: &str, size: game::Coord2) -> Result<Option<Command>, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };

    let command = match word.to_lowercase().as_str() {
        "r" | "reveal" => Command::Reveal(parse_coords(parts, size, "r")?),
        "f" | "flag" => Command::Flag(parse_coords(parts, size, "f")?),
        "n" | "new" | "reset" => Command::NewGame,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn parse_coords<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    (rows, cols): game::Coord2,
    usage: &'static str,
) -> Result<game::Coord2, ParseError> {
    let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
        return Err(ParseError::MissingCoords(usage));
    };
    let row = parse_number(row)?;
    let col = parse_number(col)?;

    let out_of_range = || ParseError::OutOfRange {
        row,
        col,
        rows,
        cols,
    };
    if row == 0 || col == 0 || row > usize::from(rows) || col > usize::from(cols) {
        return Err(out_of_range());
    }

    // bounded by the board size above, which fits in a Coord
    let row = game::Coord::try_from(row - 1).map_err(|_| out_of_range())?;
    let col = game::Coord::try_from(col - 1).map_err(|_| out_of_range())?;
    Ok((row, col))
}

fn parse_number(text: &str) -> Result<usize, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}
