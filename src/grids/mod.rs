pub mod wall_grid;

pub use wall_grid::WallGrid;

/// Bitfield of open edges for a single cell, 0 means unvisited / fully walled.
pub type Cell = u8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Directions double as the bit flags stored in each cell.
///
/// The y axis grows downward: north is up on screen and decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 1,
    South = 2,
    East = 4,
    West = 8,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    pub const fn bits(self) -> Cell {
        self as Cell
    }

    /// (dx, dy) to step one cell in this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<Direction> for Cell {
    fn from(dir: Direction) -> Self {
        dir.bits()
    }
}

#[cfg(test)]
mod test_direction {
    use super::*;

    const N: Cell = Direction::North.bits();
    const S: Cell = Direction::South.bits();
    const E: Cell = Direction::East.bits();
    const W: Cell = Direction::West.bits();

    #[test]
    fn join_directions() {
        assert_eq!((N | S | E) & S, S);
        assert_eq!((N | S | E) & W, 0);
    }

    #[test]
    fn check_directions_open() {
        assert!((N & N) != 0);
        assert!((N & S) == 0);
    }

    #[test]
    fn flags_are_distinct_single_bits() {
        let mut seen: Cell = 0;
        for dir in Direction::ALL.iter() {
            assert_eq!(dir.bits().count_ones(), 1);
            assert_eq!(seen & dir.bits(), 0);
            seen |= dir.bits();
        }
        assert_eq!(seen, 0b1111);
    }

    #[test]
    fn opposites_cancel_offsets() {
        for &dir in Direction::ALL.iter() {
            let (dx, dy) = dir.offset();
            let (ox, oy) = (-dir).offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(-(-dir), dir);
            assert_ne!(-dir, dir);
        }
    }

    #[test]
    fn north_is_up() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::South.offset(), (0, 1));
    }
}
