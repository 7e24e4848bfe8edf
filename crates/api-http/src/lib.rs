//! HTTP API Layer
//!
//! Routes of the CPU stress service:
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | Welcome text |
//! | POST | `/stress` | Launch detached CPU-burning workers |
//! | GET | `/monitor` | Sample CPU usage, autoscale above 75% |
//! | GET | `/info` | Host summary |

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

pub use handler::AppState;
pub use server::{HttpServer, HttpServerConfig, ServerHandle};

/// Build the complete router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::root))
        .route("/stress", post(handler::stress))
        .route("/monitor", get(handler::monitor))
        .route("/info", get(handler::info))
        .with_state(state)
}
