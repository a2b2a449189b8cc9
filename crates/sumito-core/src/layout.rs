//! Layout notation parsing and serialization for [`Board`].
//!
//! Five space-separated fields, in the spirit of chess FEN:
//! `<rows> <side> <black-lost> <white-lost> <ply>`. Rows run top (`I`) to
//! bottom (`A`), separated by `/`; each row uses `b`, `w`, `.` or a digit
//! run of empty cells.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::error::LayoutError;
use crate::player::Player;

/// The layout string for the standard starting position.
pub const STARTING_LAYOUT: &str = "wwwww/wwwwww/2www2/8/9/8/2bbb2/bbbbbb/bbbbb b 0 0 0";

/// Number of rows on the board.
const ROWS: usize = 9;

/// The cells of row `row_index` (0 = top), left to right.
fn row_cells(row_index: usize) -> impl Iterator<Item = Cell> {
    let r = row_index as i8 - Cell::RADIUS;
    (-Cell::RADIUS..=Cell::RADIUS).filter_map(move |q| Cell::from_axial(q, r))
}

fn parse_counter<T: FromStr>(field: &'static str, s: &str) -> Result<T, LayoutError> {
    s.parse().map_err(|_| LayoutError::InvalidCounter {
        field,
        found: s.to_string(),
    })
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != ROWS {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut sides = [CellSet::EMPTY; Player::COUNT];
        for (row_index, row_str) in rows.iter().enumerate() {
            let cells: Vec<Cell> = row_cells(row_index).collect();
            let mut column = 0usize;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=9).contains(&digit) {
                        return Err(LayoutError::InvalidCellChar { character: c });
                    }
                    column += digit as usize;
                } else if c == '.' {
                    column += 1;
                } else {
                    let player = Player::from_tag(c).ok_or(LayoutError::InvalidCellChar {
                        character: c,
                    })?;
                    if let Some(&cell) = cells.get(column) {
                        sides[player.index()] = sides[player.index()].with(cell);
                    }
                    column += 1;
                }
            }

            if column != cells.len() {
                return Err(LayoutError::BadRowLength {
                    row_index,
                    length: column,
                    expected: cells.len(),
                });
            }
        }

        let side_to_move = match fields[1] {
            "b" => Player::Black,
            "w" => Player::White,
            other => {
                return Err(LayoutError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };
        let black_lost: u8 = parse_counter("black eliminated count", fields[2])?;
        let white_lost: u8 = parse_counter("white eliminated count", fields[3])?;
        let ply: u16 = parse_counter("ply", fields[4])?;

        let [black, white] = sides;
        Ok(Board::from_parts(
            black,
            white,
            side_to_move,
            [black_lost, white_lost],
            ply,
        )?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row_index in 0..ROWS {
            if row_index > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for cell in row_cells(row_index) {
                match self.occupant(cell) {
                    Some(player) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", player.tag())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        write!(
            f,
            " {} {} {} {}",
            self.side_to_move().tag(),
            self.eliminated(Player::Black),
            self.eliminated(Player::White),
            self.ply()
        )
    }
}
