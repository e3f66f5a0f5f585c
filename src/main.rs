use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docgen_rs::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // Incidental storage only; the generation path never reads from it.
    std::fs::create_dir_all(&config.upload_folder)?;
    info!(
        "upload folder '{}', allowed extensions {:?}, body limit {} bytes",
        config.upload_folder, config.allowed_extensions, config.max_content_length
    );

    server::run(config).await
}
