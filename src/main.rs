use std::sync::Arc;

use tinyhttpd::config::Config;
use tinyhttpd::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let server_config = Arc::new(cfg.server_config()?);

    tracing::info!(
        root = %server_config.root_dir.display(),
        redirects = server_config.redirects.len(),
        "Configuration loaded"
    );

    tokio::select! {
        res = server::listener::run(&cfg.listen_addr, server_config) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
