use std::str::FromStr;

use super::cell::{Cell, Occupant};
use super::player::Color;
use super::vector::{Vector, DIRECTIONS};
use crate::error::BoardError;

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 8;

/// Per-occupant totals across the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCounts {
    pub empty: usize,
    pub black: usize,
    pub white: usize,
}

impl ColorCounts {
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Reversi grid stored row-major: `cells[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Occupant>>,
}

impl Board {
    /// Create an empty board. Size is not validated here; see
    /// [`Board::is_valid_size`].
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![vec![Occupant::Empty; width]; height],
        }
    }

    /// Build a board from explicit rows (top row first).
    pub fn from_rows(rows: Vec<Vec<Occupant>>) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::RaggedRows);
        }
        Ok(Board {
            width,
            height: rows.len(),
            cells: rows,
        })
    }

    /// Both dimensions must be even so the four starting discs sit
    /// symmetrically around the centre.
    pub fn is_valid_size(width: usize, height: usize) -> bool {
        width > 0 && height > 0 && width % 2 == 0 && height % 2 == 0
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The four discs around the centre, or a size error.
    pub fn starting_cells(&self) -> Result<[Cell; 4], BoardError> {
        if !Self::is_valid_size(self.width, self.height) {
            return Err(BoardError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let cx = self.width / 2;
        let cy = self.height / 2;
        Ok([
            Cell::new(cx, cy, Occupant::Black),
            Cell::new(cx - 1, cy - 1, Occupant::Black),
            Cell::new(cx - 1, cy, Occupant::White),
            Cell::new(cx, cy - 1, Occupant::White),
        ])
    }

    /// Seed the starting position. Leaves the board untouched on error.
    pub fn initialize_starting_position(&mut self) -> Result<(), BoardError> {
        let cells = self.starting_cells()?;
        self.apply_cells(&cells);
        Ok(())
    }

    /// Occupant at `(x, y)`; `Empty` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Occupant {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Occupant::Empty)
    }

    /// Occupant at a signed position; anything off the board reads as `Empty`.
    pub fn occupant_at(&self, x: i32, y: i32) -> Occupant {
        match self.index(Vector::new(x, y)) {
            Some((x, y)) => self.cells[y][x],
            None => Occupant::Empty,
        }
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, pos: Vector) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.dx).ok()?;
        let y = usize::try_from(pos.dy).ok()?;
        self.contains(x, y).then_some((x, y))
    }

    /// Cells flipped by placing `proposed.occupant` at `(proposed.x, proposed.y)`,
    /// in compass order. Empty when the move is illegal.
    pub fn compute_flips(&self, proposed: &Cell) -> Vec<Cell> {
        if proposed.occupant == Occupant::Empty
            || !self.contains(proposed.x, proposed.y)
            || self.get(proposed.x, proposed.y) != Occupant::Empty
        {
            return Vec::new();
        }
        let Some(origin) = Vector::from_coords(proposed.x, proposed.y) else {
            return Vec::new();
        };

        DIRECTIONS
            .iter()
            .flat_map(|&direction| self.flips_in_direction(origin, direction, proposed.occupant))
            .collect()
    }

    /// Opponent run starting next to `origin`, kept only if bracketed by `mover`.
    fn flips_in_direction(&self, origin: Vector, direction: Vector, mover: Occupant) -> Vec<Cell> {
        let opponent = mover.opposite();
        let mut run = Vec::new();
        let mut pos = origin + direction;

        while let Some((x, y)) = self.index(pos) {
            let occupant = self.cells[y][x];
            if occupant == opponent {
                run.push(Cell::new(x, y, mover));
                pos = pos + direction;
            } else if occupant == mover && !run.is_empty() {
                return run;
            } else {
                break;
            }
        }

        // Ran into an empty square or off the edge
        Vec::new()
    }

    pub fn is_legal_move(&self, proposed: &Cell) -> bool {
        !self.compute_flips(proposed).is_empty()
    }

    /// Every legal placement for `color`, in row-major order.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Cell> {
        let occupant = color.to_occupant();
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y, occupant)))
            .filter(|candidate| self.is_legal_move(candidate))
            .collect()
    }

    /// Overwrite each listed coordinate. Out-of-bounds cells are skipped.
    pub fn apply_cells(&mut self, cells: &[Cell]) {
        for cell in cells {
            if self.contains(cell.x, cell.y) {
                self.cells[cell.y][cell.x] = cell.occupant;
            }
        }
    }

    pub fn count_by_color(&self) -> ColorCounts {
        let mut counts = ColorCounts::default();
        for occupant in self.cells.iter().flatten() {
            match occupant {
                Occupant::Empty => counts.empty += 1,
                Occupant::Black => counts.black += 1,
                Occupant::White => counts.white += 1,
            }
        }
        counts
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&occupant| occupant != Occupant::Empty)
    }

    /// What to show at `(x, y)`: the highlight's occupant if it sits there,
    /// otherwise the board's own occupant.
    pub fn display_occupant(&self, x: usize, y: usize, highlight: Option<&Cell>) -> Occupant {
        match highlight {
            Some(cell) if cell.is_at(x, y) => cell.occupant,
            _ => self.get(x, y),
        }
    }

    /// One display symbol per cell.
    pub fn render_grid(&self, highlight: Option<&Cell>) -> Vec<Vec<char>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.display_occupant(x, y, highlight).symbol())
                    .collect()
            })
            .collect()
    }

    /// Text form of [`Board::render_grid`], one line per row.
    pub fn render(&self, highlight: Option<&Cell>) -> String {
        self.render_grid(highlight)
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Parses one row per line: `.` empty, `B`/`X` black, `W`/`O` white.
/// Blank lines and spaces are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '.' | '-' => Ok(Occupant::Empty),
                        'B' | 'X' => Ok(Occupant::Black),
                        'W' | 'O' => Ok(Occupant::White),
                        other => Err(BoardError::InvalidSymbol(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_rows(rows)
    }
}
