use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::app::{HotentryError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Bind to the configured host/port and serve until the process is stopped.
pub async fn serve(state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.server.host, state.config.server.port)
        .parse()
        .map_err(|e| HotentryError::Other(format!("invalid server address: {}", e)))?;

    let router = create_router(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listen and serve on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
