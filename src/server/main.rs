//! This server keeps notes in memory and serves them over HTTP.
use anyhow::Context;
use notekeep::{
    config::{ServerConfig, DEFAULT_CONFIG_FILE},
    state::AppState,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Installs the global subscriber. The returned guard flushes buffered
/// log lines when dropped and must live as long as the server.
fn setup_logging(config: &ServerConfig) -> WorkerGuard {
    let (writer, guard) = match &config.log_dir {
        Some(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            "server.log",
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_target(false)
        .with_ansi(config.log_dir.is_none())
        .with_writer(writer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("NOTEKEEP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = ServerConfig::load(&config_path).context("failed to load server config")?;
    let _guard = setup_logging(&config);

    let addr = config
        .socket_addr()
        .context("host and port do not form a socket address")?;
    let state = AppState::shared(config.schema);
    let app = notekeep::app(state);

    info!("serving notes on {addr} with {:?} schema", config.schema);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
