use crate::{Error, Result, config::Config, server};
use async_trait::async_trait;
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};

/// Hook invoked around the serving loop.
#[async_trait]
pub trait LifecycleHook: Send + Sync {
    fn name(&self) -> &str;

    async fn on_startup(&self, _config: &Config) -> Result<()> {
        Ok(())
    }

    async fn on_shutdown(&self) -> Result<()> {
        Ok(())
    }
}

/// Logs service startup and shutdown.
#[derive(Debug, Default)]
pub struct LogHook;

#[async_trait]
impl LifecycleHook for LogHook {
    fn name(&self) -> &str {
        "log"
    }

    async fn on_startup(&self, config: &Config) -> Result<()> {
        info!(
            "{} v{} starting with variant: {}",
            server::types::SERVICE_NAME,
            server::types::API_VERSION,
            config.service.variant
        );
        Ok(())
    }

    async fn on_shutdown(&self) -> Result<()> {
        info!("{} shut down", server::types::SERVICE_NAME);
        Ok(())
    }
}

pub struct App {
    config: Config,
    hooks: Vec<Arc<dyn LifecycleHook>>,
}

impl App {
    pub fn new(config: Config, hooks: Vec<Arc<dyn LifecycleHook>>) -> Self {
        Self { config, hooks }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> Router {
        server::router(&self.config)
    }

    /// Runs every startup hook in registration order, stopping at the first
    /// failure.
    pub async fn startup(&self) -> Result<()> {
        for hook in &self.hooks {
            info!("Running startup hook: {}", hook.name());
            hook.on_startup(&self.config)
                .await
                .map_err(|e| Error::hook(hook.name(), e.to_string()))?;
        }
        Ok(())
    }

    /// Runs every shutdown hook in reverse order. Failures are logged and
    /// do not stop the remaining hooks.
    pub async fn shutdown(&self) {
        for hook in self.hooks.iter().rev() {
            info!("Running shutdown hook: {}", hook.name());
            if let Err(e) = hook.on_shutdown().await {
                error!("Shutdown hook {} failed: {}", hook.name(), e);
            }
        }
    }

    pub async fn run(self) -> Result<()> {
        self.startup().await?;

        let addr = SocketAddr::new(self.config.server.host.parse()?, self.config.server.port);
        info!("Starting server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        let served = axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await;

        self.shutdown().await;
        served?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
