mod config;
mod error;
mod logging;
mod models;
mod operations;
mod store;
mod ui;

use tracing::info;

fn main() -> error::Result<()> {
    let config = config::load();
    logging::init(&config)?;

    info!("starting budget calculator");
    ui::run_app()
}
