mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "solo host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), error::HostError> {
    let config = config::HostConfig::from_env()?;
    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, timeout = ?config.proxy_timeout, "api proxy enabled"),
        None => tracing::warn!("API_UPSTREAM is empty, /api requests will answer 503"),
    }

    let addr = config.socket_addr();
    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "solo listening");
    axum::serve(listener, app).await?;
    Ok(())
}
