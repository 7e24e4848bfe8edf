// Script-based autoscale trigger
// reason: tokio::process, the script is awaited like system(3)
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::info;

use cpu_stress_core::error::{AppError, Result};
use cpu_stress_core::port::{AutoscaleTrigger, TriggerOutcome};

/// Runs an external executable with no arguments
///
/// Environment and stdio are inherited. The exit status is reported back but
/// never inspected by callers beyond logging.
pub struct ScriptAutoscaleTrigger {
    program: PathBuf,
}

impl ScriptAutoscaleTrigger {
    /// `program` may start with `~`; relative paths resolve against the working directory
    ///
    /// # Example
    /// ```ignore
    /// let trigger = ScriptAutoscaleTrigger::new("./autoscale_gcp.sh");
    /// ```
    pub fn new(program: &str) -> Self {
        Self {
            program: PathBuf::from(shellexpand::tilde(program).into_owned()),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl AutoscaleTrigger for ScriptAutoscaleTrigger {
    async fn trigger(&self) -> Result<TriggerOutcome> {
        info!(program = %self.program.display(), "Running autoscale command");

        let status = Command::new(&self.program).status().await.map_err(|e| {
            AppError::Trigger(format!("Failed to run {}: {}", self.program.display(), e))
        })?;

        Ok(TriggerOutcome {
            exit_code: status.code(),
            success: status.success(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_successful_command() {
        let trigger = ScriptAutoscaleTrigger::new("true");
        let outcome = assert_ok!(trigger.trigger().await);

        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_failing_command_is_not_an_error() {
        let trigger = ScriptAutoscaleTrigger::new("false");
        let outcome = assert_ok!(trigger.trigger().await);

        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(1));
    }

    #[tokio::test]
    async fn test_missing_script() {
        let trigger = ScriptAutoscaleTrigger::new("./definitely_missing_autoscale.sh");
        let result = trigger.trigger().await;

        assert!(matches!(result, Err(AppError::Trigger(_))));
    }

    #[test]
    fn test_tilde_expanded() {
        let trigger = ScriptAutoscaleTrigger::new("~/autoscale.sh");
        if std::env::var_os("HOME").is_some() {
            assert!(!trigger.program().starts_with("~"));
        }
        assert!(trigger.program().ends_with("autoscale.sh"));
    }
}
