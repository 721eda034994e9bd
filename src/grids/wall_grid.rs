use crate::error::{GridError, Result};
use crate::grids::{Cell, Dimensions, Direction};

/// Row-major grid of direction bitfields, addressed as (x, y) = (column, row).
///
/// A set bit means the edge in that direction is open. Cells start at 0 and
/// only ever gain bits.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimension { rows, columns });
        }

        let too_large = || GridError::TooLarge { rows, columns };
        let count = rows.checked_mul(columns).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large())?;
        cells.resize(count, 0);

        Ok(Self {
            cells,
            dims: Dimensions { rows, columns },
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, west to east.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.index_of(0, y);
        &self.cells[start..start + self.dims.columns]
    }

    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        0 <= x && (x as usize) < self.dims.columns && 0 <= y && (y as usize) < self.dims.rows
    }

    pub fn check_bounds(&self, x: isize, y: isize) -> Result<(usize, usize)> {
        if self.in_bounds(x, y) {
            Ok((x as usize, y as usize))
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                columns: self.dims.columns,
                rows: self.dims.rows,
            })
        }
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        if x >= self.dims.columns || y >= self.dims.rows {
            panic!("Invalid pos ({}, {}) for {:?}", x, y, self.dims);
        }

        (self.dims.columns * y) + x
    }

    #[inline]
    pub fn get_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index_of(x, y)]
    }

    #[inline]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y) != 0
    }

    #[inline]
    pub fn is_open(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.get_cell(x, y) & dir.bits() != 0
    }

    /// ORs `dir` into the cell, returns the previous bitfield.
    #[inline]
    pub fn open(&mut self, x: usize, y: usize, dir: Direction) -> Cell {
        let index = self.index_of(x, y);
        let prev = self.cells[index];
        self.cells[index] = prev | dir.bits();
        prev
    }

    /// Opens the shared edge on both sides. Returns the neighbor's coords.
    pub fn clear_wall_between(&mut self, x: usize, y: usize, dir: Direction) -> (usize, usize) {
        let (nx, ny) = match self.neighbor_of(x, y, dir) {
            Some(coords) => coords,
            None => panic!("no neighbor {:?} of ({}, {})", dir, x, y),
        };

        self.open(x, y, dir);
        self.open(nx, ny, -dir);

        (nx, ny)
    }

    // returns coords of neighbor, if it is on the grid
    pub fn neighbor_of(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.offset();
        let nx = x as isize + dx;
        let ny = y as isize + dy;

        if self.in_bounds(nx, ny) {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }

    /// Shared edges that are open, each counted once.
    pub fn open_edge_count(&self) -> usize {
        let south = Direction::South.bits();
        let east = Direction::East.bits();

        self.cells
            .iter()
            .map(|cell| (cell & south != 0) as usize + (cell & east != 0) as usize)
            .sum()
    }

    pub fn unvisited_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }
}
