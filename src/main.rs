use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameEngine, Speed};
use grid_snake::modes::HumanMode;
use grid_snake::persistence::FileHighScoreStore;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake game for the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid, in cells
    #[arg(long)]
    grid_cells: Option<usize>,

    /// Tick speed preset
    #[arg(long, value_enum)]
    speed: Option<Speed>,

    /// File holding the persisted high score
    #[arg(long, default_value = ".grid_snake_high_score")]
    high_score_file: PathBuf,

    /// Log output file (the terminal is taken by the game)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => GameConfig::default(),
        };

        if let Some(grid_cells) = self.grid_cells {
            config = config.with_grid_cells(grid_cells);
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }

        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = cli.game_config()?;
    let engine = GameEngine::new(config).context("Invalid game configuration")?;
    let store = FileHighScoreStore::new(&cli.high_score_file);

    tracing::info!(grid_cells = engine.config().grid_cells, "starting");

    let mut human_mode = HumanMode::new(engine, store);
    human_mode.run().await?;

    Ok(())
}
