//! HTTP Request/Response Types
//!
//! Request bodies are parsed leniently by the core (`StressRequest::from_body`),
//! so only responses live here.

use serde::Serialize;

/// POST /stress
#[derive(Debug, Clone, Serialize)]
pub struct StressResponse {
    pub message: String,
}

/// GET /monitor
#[derive(Debug, Clone, Serialize)]
pub struct MonitorResponse {
    pub cpu_usage: f64,
}

/// Any 5xx body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
