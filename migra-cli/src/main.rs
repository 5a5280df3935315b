mod cli;
mod commands;
mod setup;

use crate::cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse_args();
    setup::init_logging(&args.log_level)?;

    let config = setup::load_config(args.config.as_deref())?;
    info!("configuration loaded app_id={} asset_id={}", config.app.id, config.app.asset_id);

    commands::dispatch(args.command, &config).await?;
    Ok(())
}
