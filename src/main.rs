use std::error::Error;

use clap::Parser;

use load_genres::config::Config;
use load_genres::pipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, config.log_level())
        .init();

    pipeline::run(&config).await?;
    Ok(())
}
