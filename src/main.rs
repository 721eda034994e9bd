use std::io::Write;

use anyhow::Context;
use clap::Parser;

use backtrack_maze::config::{Args, MazeConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = MazeConfig::from_args(Args::parse());
    log::info!(
        "{}x{} maze, seed {} (pass --seed {} to reproduce)",
        config.rows,
        config.columns,
        config.seed,
        config.seed
    );

    let rendered = backtrack_maze::generate(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .context("failed to write maze to stdout")?;

    Ok(())
}
