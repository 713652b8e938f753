use std::{fs::OpenOptions, sync::Arc};

use crate::{config::AppConfig, error::Result};

/// Installs the global tracing subscriber, writing to the configured file.
pub fn init(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("hearth_tui={}", config.log_level))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
