//! File logging. The terminal belongs to the game, so log records go to a file
//! through log4rs.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::Path;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Build the log4rs configuration for a single file appender
pub fn build_config(level: LevelFilter, file_path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path)
        .with_context(|| format!("Failed to open log file {:?}", file_path))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("Invalid logging configuration")
}

/// Install the file logger; `LevelFilter::Off` leaves logging disabled
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let config = build_config(level, file_path)?;
    log4rs::init_config(config).context("Failed to install logger")?;
    Ok(())
}
