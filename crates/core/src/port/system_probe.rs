// Host probe port
// reason: async-trait, HostInfo refreshes OS counters
use async_trait::async_trait;

use crate::domain::HostInfo;

/// System probe port for host facts
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Number of logical CPUs; default worker count for POST /stress
    fn logical_cpus(&self) -> usize;

    /// Get a fresh host summary
    ///
    /// # Example
    /// ```text
    /// let info = probe.host_info().await;
    /// println!("{} has {} cpus", info.hostname, info.cpus);
    /// ```
    async fn host_info(&self) -> HostInfo;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::{LoadAverage, MemorySummary};

    /// Mock SystemProbe for testing
    pub struct MockSystemProbe {
        cpus: usize,
    }
    impl MockSystemProbe {
        pub fn new(cpus: usize) -> Self {
            Self { cpus }
        }
    }
    #[async_trait]
    impl SystemProbe for MockSystemProbe {
        fn logical_cpus(&self) -> usize {
            self.cpus
        }
        async fn host_info(&self) -> HostInfo {
            HostInfo {
                hostname: "mock-host".to_string(),
                platform: "linux".to_string(),
                architecture: "x86_64".to_string(),
                cpus: self.cpus,
                uptime_secs: 3600,
                load_average: LoadAverage {
                    one: 0.5,
                    five: 0.25,
                    fifteen: 0.1,
                },
                memory: MemorySummary::from_bytes(2048 * 1024 * 1024, 1024 * 1024 * 1024),
            }
        }
    }
}
