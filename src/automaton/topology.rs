/// The 8 neighbor directions, clockwise from the top-left corner.
///
/// The discriminants are the canonical neighbor indices `0..8` used by the
/// index addressing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
    ];

    /// `(dx, dy)` of this direction, y growing downward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(k: usize) -> Option<Direction> {
        Direction::ALL.get(k).copied()
    }

    /// Inverse of [`Direction::offset`]. `None` for `(0, 0)` and anything
    /// outside `{-1, 0, 1}²`.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }
}

/// Linear indices of the 8 neighbors of `(x, y)`, in [`Direction`] order.
/// Edges are bounded, not wrapping: offsets that leave the grid are `None`.
pub(crate) fn neighborhood(x: usize, y: usize, width: usize, height: usize) -> [Option<usize>; 8] {
    Direction::ALL.map(|dir| {
        let (dx, dy) = dir.offset();
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            None
        } else {
            Some(nx as usize + ny as usize * width)
        }
    })
}
