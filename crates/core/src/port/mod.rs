// Port Layer - Interfaces for external dependencies

pub mod autoscale_trigger;
pub mod cpu_sampler;
pub mod system_probe;
pub mod worker_launcher;

// Re-exports
pub use autoscale_trigger::{AutoscaleTrigger, TriggerOutcome};
pub use cpu_sampler::CpuSampler;
pub use system_probe::SystemProbe;
pub use worker_launcher::WorkerLauncher;
