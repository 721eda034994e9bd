pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::MazeConfig;
pub use error::{GridError, Result};
pub use generators::{explore, Generator, RecursiveBacktracker};
pub use grids::{Direction, WallGrid};
pub use renderer::{RenderStyle, TextRenderer};

/// Carves a maze from (0, 0) with the configured seed and draws it.
pub fn generate(config: &MazeConfig) -> Result<String> {
    let mut grid = WallGrid::with_dims(config.rows, config.columns)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    explore(&mut grid, (0, 0), &mut rng)?;

    Ok(TextRenderer::new(config.style).render(&grid))
}

#[cfg(test)]
mod test_generate {
    use super::*;

    fn config(rows: usize, columns: usize, seed: u64) -> MazeConfig {
        MazeConfig {
            rows,
            columns,
            seed,
            style: RenderStyle::Plain,
        }
    }

    #[test]
    fn matches_stepwise_generator() {
        let grid = WallGrid::with_dims(9, 14).unwrap();
        let rng = StdRng::seed_from_u64(77);
        let mut generator = RecursiveBacktracker::new(grid, (0, 0), rng).unwrap();
        let expected = TextRenderer::new(RenderStyle::Plain).render(generator.generate_maze());

        assert_eq!(generate(&config(9, 14, 77)).unwrap(), expected);
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(
            generate(&config(20, 20, 9)).unwrap(),
            generate(&config(20, 20, 9)).unwrap()
        );
    }

    #[test]
    fn huge_sizes_are_an_error() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            generate(&config(huge, huge, 1)),
            Err(GridError::TooLarge {
                rows: huge,
                columns: huge
            })
        );
    }
}
