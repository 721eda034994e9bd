//! Randomized recursive backtracker.
//!
//! From the current cell the four directions are tried in a freshly shuffled
//! order. Any in-bounds neighbor that is still unvisited gets the shared wall
//! cleared and is explored immediately, depth first. A cell with no directions
//! left returns to its parent, which carries on with its own remaining
//! directions.
//!
//! The call stack is kept as an explicit `Vec` of frames so a long serpentine
//! passage costs heap instead of thread stack. Each frame shuffles once, on
//! entry, which is exactly when the recursive form would.

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::{Direction, WallGrid};
use rand::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: usize,
    y: usize,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> Self {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);

        Self {
            x,
            y,
            dirs,
            next: 0,
        }
    }
}

/// Explicit call stack of the depth-first walk, innermost frame last.
#[derive(Debug)]
struct Traversal {
    stack: Vec<Frame>,
}

impl Traversal {
    fn start<R: Rng + ?Sized>(
        grid: &WallGrid,
        start: (isize, isize),
        rng: &mut R,
    ) -> Result<Self> {
        let (x, y) = grid.check_bounds(start.0, start.1)?;
        log::debug!("exploring {:?} from ({}, {})", grid.dims, x, y);

        Ok(Self {
            stack: vec![Frame::enter(x, y, rng)],
        })
    }

    /// Advances by one direction of the innermost frame.
    /// Returns false once there is nothing left to explore.
    fn step<R: Rng + ?Sized>(&mut self, grid: &mut WallGrid, rng: &mut R) -> bool {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return false,
        };

        if frame.next == frame.dirs.len() {
            // backtrack
            self.stack.pop();
            return true;
        }

        let dir = frame.dirs[frame.next];
        frame.next += 1;
        let (x, y) = (frame.x, frame.y);

        if let Some((nx, ny)) = grid.neighbor_of(x, y, dir) {
            if !grid.is_visited(nx, ny) {
                grid.clear_wall_between(x, y, dir);
                log::trace!("carved {:?} from ({}, {}) to ({}, {})", dir, x, y, nx, ny);

                self.stack.push(Frame::enter(nx, ny, rng));
            }
        }

        true
    }
}

/// Carves a perfect maze into `grid`, starting at `start` = (x, y).
///
/// Every cell reachable from the start ends up visited. On a rectangular grid
/// that is all of them, except on a 1x1 grid where the lone cell has no
/// neighbor to open towards and stays 0.
pub fn explore<R: Rng + ?Sized>(
    grid: &mut WallGrid,
    start: (isize, isize),
    rng: &mut R,
) -> Result<()> {
    let mut traversal = Traversal::start(grid, start, rng)?;
    while traversal.step(grid, rng) {}

    log::debug!(
        "explored {:?}, {} open passages",
        grid.dims,
        grid.open_edge_count()
    );
    Ok(())
}

/// Stepwise form of [`explore`], owning its grid and rng.
pub struct RecursiveBacktracker<R: Rng> {
    grid: WallGrid,
    traversal: Traversal,
    rng: R,
    pub done: bool,
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn new(grid: WallGrid, start: (isize, isize), mut rng: R) -> Result<Self> {
        let traversal = Traversal::start(&grid, start, &mut rng)?;

        Ok(Self {
            grid,
            traversal,
            rng,
            done: false,
        })
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        if !self.traversal.step(&mut self.grid, &mut self.rng) {
            self.done = true;
            log::debug!(
                "backtracker done, {} open passages",
                self.grid.open_edge_count()
            );
        }
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.done {
            self.step_generation();
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
