// Stress Use Case - resolve the worker count and launch detached tasks

use crate::domain::{LaunchReport, StressRequest, WorkerCount};
use crate::error::{AppError, Result};
use crate::port::{SystemProbe, WorkerLauncher};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one POST /stress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressOutcome {
    pub worker_count: WorkerCount,
    pub report: LaunchReport,
}

impl StressOutcome {
    /// Response message, echoing the resolved (not floored) count
    pub fn message(&self) -> String {
        format!("Started {} CPU-intensive processes.", self.worker_count)
    }
}

/// Stress Service
pub struct StressService {
    launcher: Arc<dyn WorkerLauncher>,
    system_probe: Arc<dyn SystemProbe>,
}

impl StressService {
    pub fn new(launcher: Arc<dyn WorkerLauncher>, system_probe: Arc<dyn SystemProbe>) -> Self {
        Self {
            launcher,
            system_probe,
        }
    }

    /// Launch the requested number of WorkerTasks
    ///
    /// The launch loop runs on the blocking pool so a large count never stalls
    /// other requests. Tasks are not tracked once started.
    ///
    /// # Errors
    /// - AppError::Launch if tasks were requested and none started
    pub async fn stress(&self, req: StressRequest) -> Result<StressOutcome> {
        let worker_count = req.worker_count(self.system_probe.logical_cpus());
        let to_launch = worker_count.tasks_to_launch();

        let launcher = self.launcher.clone();
        let report = tokio::task::spawn_blocking(move || launcher.launch(to_launch))
            .await
            .map_err(|e| AppError::Internal(format!("Launch task failed: {}", e)))?;

        if report.is_total_failure() {
            warn!(
                worker_count = %worker_count,
                kind = self.launcher.kind(),
                "No CPU stress task could be started"
            );
            return Err(AppError::Launch(format!(
                "0 of {} tasks started",
                report.requested
            )));
        }

        info!(
            worker_count = %worker_count,
            started = report.started,
            failed = report.failed,
            kind = self.launcher.kind(),
            "CPU stress tasks launched"
        );

        Ok(StressOutcome {
            worker_count,
            report,
        })
    }
}
