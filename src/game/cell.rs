/// State of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Black,
    White,
}

impl Occupant {
    /// The color a flip turns this occupant into. `Empty` has no opposite.
    pub fn opposite(self) -> Occupant {
        match self {
            Occupant::Empty => Occupant::Empty,
            Occupant::Black => Occupant::White,
            Occupant::White => Occupant::Black,
        }
    }

    /// Display symbol used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => '-',
            Occupant::Black => '●',
            Occupant::White => '○',
        }
    }
}

/// A board coordinate paired with an occupant.
///
/// Doubles as a proposed move: the coordinate to place on and the color
/// being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub occupant: Occupant,
}

impl Cell {
    pub fn new(x: usize, y: usize, occupant: Occupant) -> Self {
        Cell { x, y, occupant }
    }

    /// True if this cell sits at `(x, y)`, whatever its occupant.
    pub fn is_at(&self, x: usize, y: usize) -> bool {
        self.x == x && self.y == y
    }

    /// Board notation: column letter then 1-based row, e.g. `e3`.
    pub fn square_name(&self) -> String {
        match u8::try_from(self.x).ok().filter(|&x| x < 26) {
            Some(x) => format!("{}{}", char::from(b'a' + x), self.y + 1),
            None => format!("({},{})", self.x, self.y + 1),
        }
    }
}
