// Autoscale Trigger Port
// The external scaling command is opaque: only "it was invoked" matters

use async_trait::async_trait;

use crate::error::Result;

/// How the external command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOutcome {
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Autoscale trigger trait
#[async_trait]
pub trait AutoscaleTrigger: Send + Sync {
    /// Run the scaling action once and wait for it
    ///
    /// # Errors
    /// - AppError::Trigger if the command could not be started
    async fn trigger(&self) -> Result<TriggerOutcome>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// Mock trigger counting its invocations
    pub struct MockAutoscaleTrigger {
        fail_with: Option<String>,
        call_count: Arc<Mutex<usize>>,
    }
    impl MockAutoscaleTrigger {
        pub fn new() -> Self {
            Self {
                fail_with: None,
                call_count: Arc::new(Mutex::new(0)),
            }
        }
        /// Trigger whose command is "missing"
        pub fn new_fail(message: impl Into<String>) -> Self {
            Self {
                fail_with: Some(message.into()),
                call_count: Arc::new(Mutex::new(0)),
            }
        }
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }
    impl Default for MockAutoscaleTrigger {
        fn default() -> Self {
            Self::new()
        }
    }
    #[async_trait]
    impl AutoscaleTrigger for MockAutoscaleTrigger {
        async fn trigger(&self) -> Result<TriggerOutcome> {
            *self.call_count.lock().unwrap() += 1;

            match &self.fail_with {
                Some(msg) => Err(AppError::Trigger(msg.clone())),
                None => Ok(TriggerOutcome {
                    exit_code: Some(0),
                    success: true,
                }),
            }
        }
    }
}
