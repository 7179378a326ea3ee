use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use quizzes::shared::config::AppConfig;
use quizzes::shell::http::router;
use quizzes::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    // In-memory catalog for the lifetime of the process
    let state = AppState::in_memory();

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("REST endpoint: http://{}/", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
