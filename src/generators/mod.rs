pub mod recursive_backtracker;

pub use recursive_backtracker::{explore, RecursiveBacktracker};

use crate::grids::WallGrid;

pub trait Generator {
    fn step_generation(&mut self);
    fn next_step(&mut self) -> &WallGrid;
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
}
