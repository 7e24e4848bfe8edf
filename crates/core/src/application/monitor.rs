// Monitor Use Case - sample CPU, fire the autoscale trigger above the threshold

use crate::domain::CpuSample;
use crate::error::Result;
use crate::port::{AutoscaleTrigger, CpuSampler};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::constants::AUTOSCALE_CPU_THRESHOLD;

/// Monitor Service
pub struct MonitorService {
    sampler: Arc<dyn CpuSampler>,
    trigger: Arc<dyn AutoscaleTrigger>,
    threshold_percent: f64,
}

impl MonitorService {
    pub fn new(sampler: Arc<dyn CpuSampler>, trigger: Arc<dyn AutoscaleTrigger>) -> Self {
        Self {
            sampler,
            trigger,
            threshold_percent: AUTOSCALE_CPU_THRESHOLD,
        }
    }

    /// Sample CPU usage once
    ///
    /// Above the threshold the trigger runs to completion before this returns.
    /// Trigger failures are logged and never reach the caller.
    ///
    /// # Errors
    /// - Whatever the sampler returns (query or parse failure)
    pub async fn monitor(&self) -> Result<CpuSample> {
        let sample = self.sampler.sample().await.inspect_err(|e| {
            warn!(error = %e, "Failed to retrieve CPU usage");
        })?;

        debug!(cpu_usage = sample.usage_percent, "CPU sample taken");

        if sample.exceeds(self.threshold_percent) {
            warn!(
                cpu_usage = sample.usage_percent,
                threshold = self.threshold_percent,
                "🚀 High CPU detected. Triggering auto-scaling..."
            );

            match self.trigger.trigger().await {
                Ok(outcome) if outcome.success => {
                    info!(exit_code = ?outcome.exit_code, "Autoscale trigger finished");
                }
                Ok(outcome) => {
                    warn!(exit_code = ?outcome.exit_code, "Autoscale trigger exited with failure");
                }
                Err(e) => error!(error = %e, "Autoscale trigger could not be run"),
            }
        }

        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::port::autoscale_trigger::mocks::MockAutoscaleTrigger;
    use crate::port::cpu_sampler::mocks::MockCpuSampler;
    use tokio_test::{assert_err, assert_ok};

    fn service(raw: &str, trigger: Arc<MockAutoscaleTrigger>) -> MonitorService {
        MonitorService::new(Arc::new(MockCpuSampler::new(raw)), trigger)
    }

    #[tokio::test]
    async fn test_low_usage_does_not_trigger() {
        let trigger = Arc::new(MockAutoscaleTrigger::new());
        let sample = service("42.5", trigger.clone()).monitor().await.unwrap();

        assert_eq!(sample.usage_percent, 42.5);
        assert_eq!(trigger.call_count(), 0);
    }

    #[tokio::test]
    async fn test_threshold_itself_does_not_trigger() {
        let trigger = Arc::new(MockAutoscaleTrigger::new());
        service("75.0", trigger.clone()).monitor().await.unwrap();

        assert_eq!(trigger.call_count(), 0);
    }

    #[tokio::test]
    async fn test_high_usage_triggers_once() {
        let trigger = Arc::new(MockAutoscaleTrigger::new());
        let sample = service("88.0", trigger.clone()).monitor().await.unwrap();

        assert_eq!(sample.usage_percent, 88.0);
        assert_eq!(trigger.call_count(), 1);
    }

    #[tokio::test]
    async fn test_trigger_failure_is_swallowed() {
        let trigger = Arc::new(MockAutoscaleTrigger::new_fail("No such file or directory"));
        let sample = assert_ok!(service("99.9", trigger.clone()).monitor().await);

        assert_eq!(sample.usage_percent, 99.9);
        assert_eq!(trigger.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_reading_is_error() {
        let trigger = Arc::new(MockAutoscaleTrigger::new());
        let err = assert_err!(service("", trigger.clone()).monitor().await);

        assert!(matches!(err, AppError::Domain(_)));
        assert_eq!(trigger.call_count(), 0);
    }
}
