// CPU sampler port
// reason: async-trait, providers shell out or refresh OS counters
use async_trait::async_trait;

use crate::domain::CpuSample;
use crate::error::Result;

/// Source of the current aggregate CPU utilization
///
/// Implementations:
/// - ShellCpuSampler: scrapes `top` output through `sh -c`
/// - SysinfoCpuSampler: reads OS counters natively
#[async_trait]
pub trait CpuSampler: Send + Sync {
    /// Take one fresh sample
    ///
    /// # Errors
    /// - AppError::Sampling if the query could not be run
    /// - AppError::Domain if its output is not a finite number
    async fn sample(&self) -> Result<CpuSample>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Mock sampler fed with raw utility output, so the parse path runs for real
    pub struct MockCpuSampler {
        raw_output: Arc<Mutex<String>>,
        delay: Option<Duration>,
        call_count: Arc<Mutex<usize>>,
    }
    impl MockCpuSampler {
        pub fn new(raw_output: impl Into<String>) -> Self {
            Self {
                raw_output: Arc::new(Mutex::new(raw_output.into())),
                delay: None,
                call_count: Arc::new(Mutex::new(0)),
            }
        }
        /// Sleep before answering, like a slow external utility
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
        pub fn set_output(&self, raw_output: impl Into<String>) {
            *self.raw_output.lock().unwrap() = raw_output.into();
        }
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }
    #[async_trait]
    impl CpuSampler for MockCpuSampler {
        async fn sample(&self) -> Result<CpuSample> {
            *self.call_count.lock().unwrap() += 1;

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let raw = self.raw_output.lock().unwrap().clone();
            Ok(CpuSample::parse_reading(&raw)?)
        }
    }
}
