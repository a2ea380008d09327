use std::ops::Add;

/// Signed 2-D offset. Also used for positions while walking the board,
/// since a walk can step past the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

/// The eight compass directions, in flip-scan order.
pub const DIRECTIONS: [Vector; 8] = [
    Vector::new(-1, -1),
    Vector::new(-1, 0),
    Vector::new(-1, 1),
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(1, -1),
    Vector::new(1, 0),
    Vector::new(1, 1),
];

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Vector { dx, dy }
    }

    /// Position vector for a board coordinate, or `None` if it cannot be
    /// represented as `i32`.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        Some(Vector::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}
