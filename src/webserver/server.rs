/// Axum webserver implementation
///
/// Main server lifecycle management including startup, shutdown, and
/// graceful termination
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::{
    arguments,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down
pub async fn start_server(state: Arc<AppState>) -> Result<(), String> {
    let host = arguments::get_host();
    let port = arguments::get_port();

    logger::debug(
        LogTag::Webserver,
        &format!("🌐 Starting webserver on {}:{}", host, port),
    );

    // Build the router
    let app = build_app(state);

    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("Invalid bind address {}:{}: {}", host, port, e))?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        // Provide helpful error message for common cases
        match e.kind() {
            std::io::ErrorKind::AddrInUse => {
                format!(
                    "Failed to bind to {}: Address already in use\n\
                     Another instance of loanrisk may be running.\n\
                     Stop it or choose a different --port.",
                    addr
                )
            }
            std::io::ErrorKind::PermissionDenied => {
                format!(
                    "Failed to bind to {}: Permission denied\n\
                     Port {} requires elevated privileges on this system.\n\
                     Consider a port above 1024 or appropriate permissions.",
                    addr, port
                )
            }
            _ => format!("Failed to bind to {}: {}", addr, e),
        }
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("✅ Webserver listening on http://{}", addr),
    );

    // Run the server with graceful shutdown
    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "✅ Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state)
}
