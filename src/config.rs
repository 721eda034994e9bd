use std::num::NonZeroUsize;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::renderer::RenderStyle;

const DEFAULT_DIMS: (usize, usize) = (20, 20);

/// Generate a perfect maze with a randomized recursive backtracker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze height in cells
    #[arg(requires = "width")]
    pub height: Option<NonZeroUsize>,

    /// Maze width in cells
    #[arg(requires = "height")]
    pub width: Option<NonZeroUsize>,

    /// Random seed, the same seed and size always give the same maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to draw the maze
    #[arg(long, value_enum, default_value_t = RenderStyle::Plain)]
    pub style: RenderStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub seed: u64,
    pub style: RenderStyle,
}

impl MazeConfig {
    pub fn from_args(args: Args) -> Self {
        let (rows, columns) = match (args.height, args.width) {
            (Some(height), Some(width)) => (height.get(), width.get()),
            _ => DEFAULT_DIMS,
        };

        Self {
            rows,
            columns,
            seed: args.seed.unwrap_or_else(time_seed),
            style: args.style,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod test_config {
    use super::*;

    fn parse(args: &[&str]) -> Result<MazeConfig, clap::Error> {
        let mut argv = vec!["backtrack-maze"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).map(MazeConfig::from_args)
    }

    #[test]
    fn defaults_to_twenty_square() {
        let config = parse(&["--seed", "3"]).unwrap();
        assert_eq!(config.rows, 20);
        assert_eq!(config.columns, 20);
        assert_eq!(config.seed, 3);
        assert_eq!(config.style, RenderStyle::Plain);
    }

    #[test]
    fn height_then_width() {
        let config = parse(&["4", "9", "--style", "arrows"]).unwrap();
        assert_eq!((config.rows, config.columns), (4, 9));
        assert_eq!(config.style, RenderStyle::Arrows);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(parse(&["abc", "5"]).is_err());
        assert!(parse(&["5", "x"]).is_err());
        assert!(parse(&["0", "5"]).is_err());
        assert!(parse(&["5", "-2"]).is_err());
    }

    #[test]
    fn rejects_lone_height() {
        assert!(parse(&["5"]).is_err());
    }

    #[test]
    fn unseeded_runs_still_get_a_seed() {
        // nothing to compare against, just has to parse
        assert!(parse(&["2", "2"]).is_ok());
    }
}
