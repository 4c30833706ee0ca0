use mindscope_chat::chain::ResponseChain;
use mindscope_server::config::ServerConfig;
use mindscope_server::state::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tokio::fs::create_dir_all(&config.data_dir).await?;
    info!(
        bind = %config.bind,
        data_dir = %config.data_dir.display(),
        chat = ?config.chat,
        "starting mindscope server"
    );

    let chain = ResponseChain::from_config(&config.chat);
    let state = AppState::new(config.data_dir, chain);

    let listener = TcpListener::bind(config.bind).await?;
    axum::serve(listener, mindscope_server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
