//! Terminal rating widget entry point.
use anyhow::Result;
use rating_tui::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _guard = rating_tui::logging::init();

    let config = CliConfig::from_env();
    rating_tui::run(config).await
}
