//! Listener setup and the server run loop.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use super::http::{create_router, AppState};
use crate::application::KeyInjector;
use crate::domain::ServerConfig;

/// Binds `config.bind_addr` and serves until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound, if the server fails, or
/// if an injection error occurs while the failure policy is `FailFast`.
pub async fn run_server(config: ServerConfig, injector: Arc<dyn KeyInjector>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    serve(listener, config, injector, ctrl_c()).await
}

/// Serves the router on an already-bound listener until `shutdown` resolves
/// or a fatal injection error is reported.
///
/// Shutdown is graceful in both cases: in-flight responses, including the 500
/// for the request that failed, are written before this returns.
pub async fn serve<F>(
    listener: TcpListener,
    config: ServerConfig,
    injector: Arc<dyn KeyInjector>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("listener has no local address")?;
    let (state, mut fatal_rx) = AppState::new(&config, injector);
    let app = create_router(state);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let watcher = tokio::spawn(async move {
        let reason = tokio::select! {
            () = shutdown => None,
            Some(err) = fatal_rx.recv() => Some(err),
        };
        let _ = stop_tx.send(());
        reason
    });

    info!(
        "listening on {local_addr} (failure policy: {:?})",
        config.failure_policy
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = stop_rx.await;
        })
        .await
        .context("HTTP server failed")?;

    match watcher.await.context("shutdown watcher panicked")? {
        Some(err) => {
            error!("stopping: {err}");
            Err(anyhow::Error::new(err).context("stopped after key injection failure"))
        }
        None => {
            info!("server stopped");
            Ok(())
        }
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            error!("failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
