//! JSON API over the task list service.
//!
//! Routes mirror the console commands:
//!
//! | Method | Path                      | Operation                 |
//! |--------|---------------------------|---------------------------|
//! | POST   | `/projects`               | create a project          |
//! | GET    | `/projects/{name}/tasks`  | list one project's tasks  |
//! | POST   | `/projects/{name}/tasks`  | add a task                |
//! | GET    | `/tasks/by-project`       | tasks grouped by project  |
//! | GET    | `/tasks/by-deadline`      | tasks grouped by due date |
//! | GET    | `/tasks/{id}`             | one task                  |
//! | PUT    | `/tasks/{id}/status`      | check or uncheck          |
//! | PUT    | `/tasks/{id}/deadline`    | set the due date          |

pub mod dto;
mod error;
mod handlers;
mod router;

pub use error::{ApiError, ApiErrorResponse};
pub use router::router;

use axum::Router;
use tokio::net::TcpListener;

/// Serves `app` on `listener` until Ctrl-C is received.
///
/// In-flight requests complete before the function returns.
///
/// # Errors
///
/// Returns an I/O error when accepting connections fails.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    match listener.local_addr() {
        Ok(address) => tracing::info!(%address, "listening"),
        Err(error) => tracing::warn!(%error, "could not determine local address"),
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(error) => {
            tracing::warn!(%error, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
