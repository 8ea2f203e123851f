use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use axum::Router;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::routes::build_router;
use crate::server::state::AppState;

pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Builds the shared state from `config` and binds the listener.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let state = AppState::from_config(&config)?;
        let addr = config.listen_addr();

        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!("Server bound to {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", addr, e);
                return Err(e.into());
            }
        };

        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until Ctrl-C is received.
    pub async fn start(self) -> Result<(), ServerError> {
        info!("Starting sign-in server on {}", self.local_addr()?);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
