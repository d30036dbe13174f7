mod config;
mod routes;

use config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;

    tracing::info!(bind = %config.bind_addr, port = config.port, "chat widget catalog listening");
    axum::serve(listener, app).await?;
    Ok(())
}
