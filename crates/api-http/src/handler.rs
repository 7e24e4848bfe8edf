//! HTTP Route Handlers
//!
//! Handlers stay thin: each one calls a core service and shapes its JSON.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use cpu_stress_core::application::constants::WELCOME_MESSAGE;
use cpu_stress_core::application::{MonitorService, StressService};
use cpu_stress_core::domain::{HostInfo, StressRequest};
use cpu_stress_core::port::{AutoscaleTrigger, CpuSampler, SystemProbe, WorkerLauncher};
use std::sync::Arc;

use crate::error::ApiError;
use crate::types::{MonitorResponse, StressResponse};

/// Services shared by all handlers, built once at startup
#[derive(Clone)]
pub struct AppState {
    stress: Arc<StressService>,
    monitor: Arc<MonitorService>,
    system_probe: Arc<dyn SystemProbe>,
}

impl AppState {
    pub fn new(
        launcher: Arc<dyn WorkerLauncher>,
        sampler: Arc<dyn CpuSampler>,
        trigger: Arc<dyn AutoscaleTrigger>,
        system_probe: Arc<dyn SystemProbe>,
    ) -> Self {
        Self {
            stress: Arc::new(StressService::new(launcher, system_probe.clone())),
            monitor: Arc::new(MonitorService::new(sampler, trigger)),
            system_probe,
        }
    }
}

/// GET /
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// POST /stress
///
/// The body is taken raw: no content type is required and a missing or
/// broken body means "one worker per CPU".
pub async fn stress(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StressResponse>, ApiError> {
    let req = StressRequest::from_body(&body);
    let outcome = state.stress.stress(req).await?;

    Ok(Json(StressResponse {
        message: outcome.message(),
    }))
}

/// GET /monitor
pub async fn monitor(State(state): State<AppState>) -> Result<Json<MonitorResponse>, ApiError> {
    let sample = state.monitor.monitor().await.map_err(ApiError::cpu_usage)?;

    Ok(Json(MonitorResponse {
        cpu_usage: sample.usage_percent,
    }))
}

/// GET /info
pub async fn info(State(state): State<AppState>) -> Json<HostInfo> {
    Json(state.system_probe.host_info().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use cpu_stress_core::port::autoscale_trigger::mocks::MockAutoscaleTrigger;
    use cpu_stress_core::port::cpu_sampler::mocks::MockCpuSampler;
    use cpu_stress_core::port::system_probe::mocks::MockSystemProbe;
    use cpu_stress_core::port::worker_launcher::mocks::MockWorkerLauncher;
    use tower::ServiceExt;

    fn state(reading: &str, launcher: MockWorkerLauncher) -> AppState {
        AppState::new(
            Arc::new(launcher),
            Arc::new(MockCpuSampler::new(reading)),
            Arc::new(MockAutoscaleTrigger::new()),
            Arc::new(MockSystemProbe::new(2)),
        )
    }

    async fn call(state: AppState, req: Request<Body>) -> (StatusCode, String) {
        let resp = build_router(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_text() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = call(state("0", MockWorkerLauncher::new()), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_stress_message() {
        let req = Request::builder()
            .method("POST")
            .uri("/stress")
            .body(Body::from(r#"{"threads": 3}"#))
            .unwrap();
        let (status, body) = call(state("0", MockWorkerLauncher::new()), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Started 3 CPU-intensive processes."}"#);
    }

    #[tokio::test]
    async fn test_stress_launch_failure_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/stress")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(state("0", MockWorkerLauncher::failing_after(0)), req).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Failed to start CPU-intensive processes"}"#);
    }

    #[tokio::test]
    async fn test_monitor_bodies() {
        let req = Request::builder().uri("/monitor").body(Body::empty()).unwrap();
        let (status, body) = call(state("42.5", MockWorkerLauncher::new()), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"cpu_usage":42.5}"#);

        let req = Request::builder().uri("/monitor").body(Body::empty()).unwrap();
        let (status, body) = call(state("", MockWorkerLauncher::new()), req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Failed to retrieve CPU usage"}"#);
    }
}
