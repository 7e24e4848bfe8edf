// System probe and native CPU sampler
// reason: sysinfo for cross-platform system monitoring
use async_trait::async_trait;
use std::sync::Mutex;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

use cpu_stress_core::domain::{CpuSample, HostInfo, LoadAverage, MemorySummary};
use cpu_stress_core::error::Result;
use cpu_stress_core::port::{CpuSampler, SystemProbe};

/// System probe implementation using sysinfo
///
/// The logical CPU count is read once at construction; it is the default
/// worker count and does not change while the process runs.
pub struct SysinfoSystemProbe {
    system: Mutex<System>,
    logical_cpus: usize,
}

impl SysinfoSystemProbe {
    /// Create a new system probe
    ///
    /// # Example
    /// ```ignore
    /// let probe = SysinfoSystemProbe::new();
    /// ```
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();

        let logical_cpus = match system.cpus().len() {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };

        Self {
            system: Mutex::new(system),
            logical_cpus,
        }
    }
}

impl Default for SysinfoSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for SysinfoSystemProbe {
    fn logical_cpus(&self) -> usize {
        self.logical_cpus
    }

    async fn host_info(&self) -> HostInfo {
        let memory = {
            let mut sys = self.system.lock().unwrap_or_else(|e| e.into_inner());
            sys.refresh_memory();
            MemorySummary::from_bytes(sys.total_memory(), sys.available_memory())
        };

        let load = System::load_average();

        let info = HostInfo {
            hostname: System::host_name().unwrap_or_default(),
            platform: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            cpus: self.logical_cpus,
            uptime_secs: System::uptime(),
            load_average: LoadAverage {
                one: load.one,
                five: load.five,
                fifteen: load.fifteen,
            },
            memory,
        };

        debug!(
            hostname = %info.hostname,
            cpus = info.cpus,
            mem_used_mb = info.memory.used_mb,
            mem_total_mb = info.memory.total_mb,
            "Host info collected"
        );

        info
    }
}

/// Native CPU sampler using sysinfo
///
/// CPU usage is a delta between two refreshes, so every sample waits
/// `MINIMUM_CPU_UPDATE_INTERVAL`. Each call owns its own `System`, so
/// concurrent samples never wait on each other.
pub struct SysinfoCpuSampler;

impl SysinfoCpuSampler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SysinfoCpuSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CpuSampler for SysinfoCpuSampler {
    async fn sample(&self) -> Result<CpuSample> {
        let mut sys = System::new();
        sys.refresh_cpu();
        tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
        sys.refresh_cpu();

        let usage = f64::from(sys.global_cpu_info().cpu_usage());
        debug!(cpu = %usage, "Native CPU sample collected");

        Ok(CpuSample::new(usage)?)
    }
}
