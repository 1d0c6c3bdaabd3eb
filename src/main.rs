//! Magnetic Cave console
//!
//! Play against another person or the automated player in a terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use magnetic_cave::game::Console;
use magnetic_cave::{AIEngine, EngineConfig, GameMode};

#[derive(Parser)]
#[command(name = "magnetic-cave")]
#[command(version, about = "Five-in-a-row on an 8x8 board", long_about = None)]
struct Cli {
    /// JSON engine configuration (`depth`, `time_limit_ms`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plies the automated player looks ahead after its own move
    #[arg(long)]
    depth: Option<u32>,

    /// Time budget per automated move, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Skip the menu and play this mode every round
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Player vs. Player
    Hvh,
    /// Player vs. Automatic
    Hve,
    /// Automatic vs. Player
    Evh,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Hvh => GameMode::HumanVsHuman,
            ModeArg::Hve => GameMode::HumanVsEngine,
            ModeArg::Evh => GameMode::EngineVsHuman,
        }
    }
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading engine config from {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(ms) = self.time_limit_ms {
            config.time_limit_ms = ms;
        }
        config.validate().context("invalid engine settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;
    info!("engine config: {config:?}");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), AIEngine::with_config(config));
    console
        .run(cli.mode.map(GameMode::from))
        .context("console session failed")?;
    Ok(())
}
