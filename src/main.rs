mod app;
mod components;
mod config;
mod flow;
mod logging;
mod storage;
mod ui;

use clap::Parser;
use color_eyre::Result;
use config::{Cli, Config};
use storage::{SettingKey, Storage};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => storage::default_data_dir()?,
    };
    let storage = Storage::open(&data_dir)?;
    let _log_guard = logging::init(storage.root())?;

    let config = Config::resolve(
        &cli,
        storage.settings().get(SettingKey::AccessNodeUrl)?,
        storage.settings().get(SettingKey::LastAddress)?,
    );
    tracing::info!(
        network = config.network.label(),
        access_node = %config.access_node.url,
        source = ?config.access_node.source,
        "starting"
    );

    let app = app::App::new(config, storage)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    if let Err(err) = &result {
        tracing::error!(%err, "exited with error");
    }
    result
}
