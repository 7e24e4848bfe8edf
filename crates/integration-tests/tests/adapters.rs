//! End-to-end tests through the real OS adapters
//!
//! Commands are harmless stand-ins (`echo`, `true`, a temp script) so nothing
//! here burns CPU or calls a cloud API.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use cpu_stress_api_http::{build_router, AppState};
use cpu_stress_core::port::system_probe::mocks::MockSystemProbe;
use cpu_stress_core::port::SystemProbe;
use cpu_stress_infra_system::{
    ProcessWorkerLauncher, ScriptAutoscaleTrigger, ShellCpuSampler, SysinfoSystemProbe,
};

/// Script touching a marker file, so its run is observable
fn marker_script(name: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("cpu-stress-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let marker = dir.join("triggered");
    let _ = std::fs::remove_file(&marker);

    let script = dir.join("autoscale.sh");
    std::fs::write(
        &script,
        format!("#!/bin/sh\necho scaled >> '{}'\n", marker.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    (script, marker)
}

fn state(query: &str, script: &Path) -> AppState {
    AppState::new(
        Arc::new(ProcessWorkerLauncher::new("true", vec![])),
        Arc::new(ShellCpuSampler::with_query(query)),
        Arc::new(ScriptAutoscaleTrigger::new(&script.to_string_lossy())),
        Arc::new(MockSystemProbe::new(2)),
    )
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn high_shell_reading_runs_script_before_responding() {
    let (script, marker) = marker_script("high");
    let router = build_router(state("echo 88.0", &script));

    let (status, body) = get(router, "/monitor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cpu_usage": 88.0}));
    let runs = std::fs::read_to_string(&marker).unwrap();
    assert_eq!(runs.lines().count(), 1);
}

#[tokio::test]
async fn low_shell_reading_leaves_script_alone() {
    let (script, marker) = marker_script("low");
    let router = build_router(state("echo 42.5", &script));

    let (status, body) = get(router, "/monitor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cpu_usage": 42.5}));
    assert!(!marker.exists());
}

#[tokio::test]
async fn missing_script_does_not_fail_request() {
    let router = build_router(state("echo 99", Path::new("./no_such_autoscale.sh")));

    let (status, body) = get(router, "/monitor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cpu_usage": 99.0}));
}

#[tokio::test]
async fn empty_shell_output_is_500() {
    let (script, marker) = marker_script("empty");
    let router = build_router(state("printf ''", &script));

    let (status, body) = get(router, "/monitor").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to retrieve CPU usage"}));
    assert!(!marker.exists());
}

#[tokio::test]
async fn stress_through_process_launcher() {
    let (script, _) = marker_script("stress");
    let router = build_router(state("echo 0", &script));

    let req = Request::builder()
        .method("POST")
        .uri("/stress")
        .body(Body::from(r#"{"threads": 2}"#))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn info_from_sysinfo() {
    let (script, _) = marker_script("info");
    let probe = Arc::new(SysinfoSystemProbe::new());
    let state = AppState::new(
        Arc::new(ProcessWorkerLauncher::new("true", vec![])),
        Arc::new(ShellCpuSampler::with_query("echo 0")),
        Arc::new(ScriptAutoscaleTrigger::new(&script.to_string_lossy())),
        probe.clone(),
    );

    let (status, body) = get(build_router(state), "/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cpus"], probe.logical_cpus());
    assert_eq!(body["platform"], std::env::consts::OS);
}
