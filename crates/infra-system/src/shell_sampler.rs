// Shell-based CPU sampler
// reason: tokio::process so a slow `top` only suspends its own request
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use cpu_stress_core::domain::CpuSample;
use cpu_stress_core::error::{AppError, Result};
use cpu_stress_core::port::CpuSampler;

/// Busy percentage = 100 - idle column of top's `Cpu(s)` line
pub const TOP_CPU_QUERY: &str = "top -bn1 | grep 'Cpu(s)' | awk '{print 100 - $8}'";

const DEFAULT_SHELL: &str = "sh";

/// Runs a shell pipeline and parses its stdout as a percentage
///
/// The exit status of the pipeline is ignored; only its output counts.
pub struct ShellCpuSampler {
    shell: String,
    query: String,
}

impl ShellCpuSampler {
    /// Sampler running the `top` pipeline
    ///
    /// # Example
    /// ```ignore
    /// let sampler = ShellCpuSampler::new();
    /// let sample = sampler.sample().await?;
    /// ```
    pub fn new() -> Self {
        Self::with_query(TOP_CPU_QUERY)
    }

    /// Sampler running an arbitrary pipeline
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            query: query.into(),
        }
    }

    /// Override the shell binary
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }
}

impl Default for ShellCpuSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CpuSampler for ShellCpuSampler {
    async fn sample(&self) -> Result<CpuSample> {
        // C locale keeps `top` printing '.' as decimal separator
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&self.query)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| AppError::Sampling(format!("Failed to run {}: {}", self.shell, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        debug!(
            query = %self.query,
            exit_code = ?output.status.code(),
            stdout = %stdout.trim(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "CPU query finished"
        );

        Ok(CpuSample::parse_reading(&stdout)?)
    }
}
