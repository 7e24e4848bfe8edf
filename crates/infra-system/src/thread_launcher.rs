// Thread-based worker launcher
// Each WorkerTask is a detached OS thread, so every task can pin its own core
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, warn};

use cpu_stress_core::application::constants::BURN_BATCH_SIZE;
use cpu_stress_core::application::workload::run_worker;
use cpu_stress_core::domain::LaunchReport;
use cpu_stress_core::port::WorkerLauncher;

const DEFAULT_NAME_PREFIX: &str = "stress-worker-";

/// Spawns named, detached OS threads running the burn loop
///
/// Join handles are dropped right away: the threads are never joined and do
/// not keep the process alive on exit.
pub struct ThreadWorkerLauncher {
    batch_size: u64,
    name_prefix: String,
    next_id: AtomicUsize,
}

impl ThreadWorkerLauncher {
    pub fn new() -> Self {
        Self::with_batch_size(BURN_BATCH_SIZE)
    }

    pub fn with_batch_size(batch_size: u64) -> Self {
        Self {
            batch_size,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Thread names are `<prefix><id>`; Linux keeps only the first 15 bytes
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }
}

impl Default for ThreadWorkerLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerLauncher for ThreadWorkerLauncher {
    fn launch(&self, count: usize) -> LaunchReport {
        let mut report = LaunchReport {
            requested: count,
            ..Default::default()
        };

        for _ in 0..count {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let batch_size = self.batch_size;

            let spawned = thread::Builder::new()
                .name(format!("{}{}", self.name_prefix, id))
                .spawn(move || run_worker(batch_size));

            match spawned {
                Ok(_detached) => {
                    debug!(worker_id = id, "Stress thread spawned");
                    report.started += 1;
                }
                Err(e) => {
                    // The OS refused a thread; the remaining ones would fail the same way
                    warn!(
                        worker_id = id,
                        started = report.started,
                        requested = count,
                        error = %e,
                        "Failed to spawn stress thread"
                    );
                    report.failed += 1;
                    break;
                }
            }
        }

        report
    }

    fn kind(&self) -> &'static str {
        "thread"
    }
}
