//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::application::services::{AggregatorService, AggregatorServiceImpl, LogService};
use crate::config::{ServiceRole, Settings};
use crate::infrastructure::downstream::{create_http_client, HttpAuthGateway, HttpLogGateway};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub log: LogService,
    pub aggregator: Arc<dyn AggregatorService>,
}

impl AppState {
    /// Wire the HTTP gateways for the configured upstream addresses
    pub fn new(settings: Settings) -> Result<Self> {
        let client = create_http_client().context("Failed to build HTTP client")?;
        let auth = HttpAuthGateway::new(client.clone(), settings.upstream.auth_url());
        let log = HttpLogGateway::new(client, settings.upstream.log_url());

        Ok(Self::with_aggregator(
            settings,
            Arc::new(AggregatorServiceImpl::new(Arc::new(auth), Arc::new(log))),
        ))
    }

    /// Build state around an existing aggregator
    pub fn with_aggregator(settings: Settings, aggregator: Arc<dyn AggregatorService>) -> Self {
        Self {
            settings: Arc::new(settings),
            log: LogService::default(),
            aggregator,
        }
    }
}

/// Build the full router, middleware included
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    role: ServiceRole,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let role = settings.service.role;

        if role == ServiceRole::Api {
            let upstream = &settings.upstream;
            if upstream.auth_addr.is_empty() {
                tracing::warn!("AUTH_ADDR is not set; every auth call will fail");
            }
            if upstream.log_addr.is_empty() {
                tracing::warn!("LOG_ADDR is not set; every log call will fail");
            }
            tracing::info!(
                auth_url = %upstream.auth_url(),
                log_url = %upstream.log_url(),
                "Upstream services configured"
            );
        }

        let addr = settings
            .server
            .socket_addr()
            .with_context(|| format!("Invalid server address '{}'", settings.server_addr()))?;

        let state = AppState::new(settings)?;
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;
        tracing::info!(role = %role, "Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            role,
        })
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        tracing::info!(role = %self.role, "Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
