// Process-based worker launcher
// Each WorkerTask is a child process re-executing this binary in burn mode
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use cpu_stress_core::domain::LaunchReport;
use cpu_stress_core::port::WorkerLauncher;

/// Hidden subcommand the daemon answers by burning CPU forever
pub const BURN_SUBCOMMAND: &str = "burn";

/// Spawns one child process per task and drops the handle
///
/// Children are never waited on. They stay in the parent's process group, so a
/// terminal Ctrl+C stops them together with the server.
pub struct ProcessWorkerLauncher {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessWorkerLauncher {
    /// Re-execute the running binary with the `burn` subcommand
    pub fn from_current_exe() -> std::io::Result<Self> {
        Ok(Self::new(
            std::env::current_exe()?,
            vec![BURN_SUBCOMMAND.to_string()],
        ))
    }

    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl WorkerLauncher for ProcessWorkerLauncher {
    #[allow(clippy::zombie_processes)]
    fn launch(&self, count: usize) -> LaunchReport {
        let mut report = LaunchReport {
            requested: count,
            ..Default::default()
        };

        for _ in 0..count {
            let spawned = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(child) => {
                    debug!(pid = child.id(), "Stress process spawned");
                    report.started += 1;
                }
                Err(e) => {
                    warn!(
                        program = %self.program.display(),
                        started = report.started,
                        requested = count,
                        error = %e,
                        "Failed to spawn stress process"
                    );
                    report.failed += 1;
                    break;
                }
            }
        }

        report
    }

    fn kind(&self) -> &'static str {
        "process"
    }
}
