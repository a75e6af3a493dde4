use anyhow::Result;
use clap::Parser;
use s3_upload_action::cli::{load_local_dotenv, run, Cli};
use s3_upload_action::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    load_local_dotenv();

    init_tracing();
    tracing::info!("Action startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("Action completed successfully"),
        Err(e) => tracing::error!(error = %e, "Action exited with error"),
    }
    result
}
