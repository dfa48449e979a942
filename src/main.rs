use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use std::path::PathBuf;
use wrap_snake::game::{GameConfig, InputPolicy};
use wrap_snake::logging::init_log;
use wrap_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a wrap-around board")]
struct Cli {
    /// Board width in board units
    #[arg(long, default_value = "800")]
    width: i32,

    /// Board height in board units
    #[arg(long, default_value = "600")]
    height: i32,

    /// Size of one cell in board units
    #[arg(long, default_value = "20")]
    cell_size: i32,

    /// Game ticks per second
    #[arg(long, default_value = "10")]
    tps: u32,

    /// Number of apples on the board
    #[arg(long, default_value = "1")]
    apples: usize,

    /// How queued key presses are consumed each tick
    #[arg(long, value_enum, default_value = "consume-one")]
    input_policy: PolicyArg,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "wrap_snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Act on one key press per tick
    ConsumeOne,
    /// Act on the last key press received since the previous tick
    DrainKeepLast,
}

impl From<PolicyArg> for InputPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ConsumeOne => InputPolicy::ConsumeOne,
            PolicyArg::DrainKeepLast => InputPolicy::DrainKeepLast,
        }
    }
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_width: self.width,
            board_height: self.height,
            cell_size: self.cell_size,
            ticks_per_second: self.tps,
            apple_count: self.apples,
            input_policy: self.input_policy.into(),
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_log(cli.log_level, &cli.log_file)?;

    // Create game configuration from CLI arguments
    let config = cli.game_config();
    config.validate().context("Invalid game configuration")?;
    info!(
        "starting with {}",
        serde_json::to_string(&config).context("Failed to serialize configuration")?
    );

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
