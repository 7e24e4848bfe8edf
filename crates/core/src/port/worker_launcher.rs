// Worker Launcher Port
// Abstraction for starting detached CPU-burning tasks (OS threads or child processes)

use crate::domain::LaunchReport;

/// Worker launcher trait
///
/// Launched tasks are detached on purpose: implementations must not keep
/// handles, join, or kill them. Nothing can ask how many are still running.
///
/// Implementations:
/// - ThreadWorkerLauncher: one detached OS thread per task
/// - ProcessWorkerLauncher: one child process per task
pub trait WorkerLauncher: Send + Sync {
    /// Start `count` tasks and report how many made it
    ///
    /// Blocking: callers on an async runtime should use `spawn_blocking`.
    fn launch(&self, count: usize) -> LaunchReport;

    /// Short name for logs ("thread", "process")
    fn kind(&self) -> &'static str;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock launcher that only records what it was asked to start
    pub struct MockWorkerLauncher {
        reports: Arc<Mutex<Vec<LaunchReport>>>,
        max_started: Option<usize>,
    }
    impl MockWorkerLauncher {
        pub fn new() -> Self {
            Self {
                reports: Arc::new(Mutex::new(Vec::new())),
                max_started: None,
            }
        }
        /// Fail the spawn right after `max_started` tasks per call
        pub fn failing_after(max_started: usize) -> Self {
            Self {
                reports: Arc::new(Mutex::new(Vec::new())),
                max_started: Some(max_started),
            }
        }
        /// Counts passed to each launch call
        pub fn launches(&self) -> Vec<usize> {
            self.reports.lock().unwrap().iter().map(|r| r.requested).collect()
        }
        pub fn total_started(&self) -> usize {
            self.reports.lock().unwrap().iter().map(|r| r.started).sum()
        }
    }
    impl Default for MockWorkerLauncher {
        fn default() -> Self {
            Self::new()
        }
    }
    impl WorkerLauncher for MockWorkerLauncher {
        fn launch(&self, count: usize) -> LaunchReport {
            let started = self.max_started.map_or(count, |max| count.min(max));
            let report = LaunchReport {
                requested: count,
                started,
                failed: usize::from(started < count),
            };
            self.reports.lock().unwrap().push(report);
            report
        }
        fn kind(&self) -> &'static str {
            "mock"
        }
    }
}
