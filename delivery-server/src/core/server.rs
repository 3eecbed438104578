//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::time::Duration;

use crate::core::{Config, Result, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let app = build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            environment = %self.config.environment,
            "Delivery Server listening on {}",
            addr
        );

        let shutdown_timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        let shutdown = async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!(
                timeout_ms = shutdown_timeout.as_millis() as u64,
                "Shutting down..."
            );
        };

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .into_future();

        // 收到关闭信号后，最多等待 shutdown_timeout 让在途请求完成
        tokio::select! {
            result = serve => {
                result?;
            }
            _ = async {
                let _ = tokio::signal::ctrl_c().await;
                tokio::time::sleep(shutdown_timeout).await;
            } => {
                tracing::warn!("Graceful shutdown timed out, forcing exit");
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
