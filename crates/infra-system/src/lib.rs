// CPU Stress Infrastructure - System Adapters
// Implements: CpuSampler, WorkerLauncher, AutoscaleTrigger, SystemProbe

pub mod process_launcher;
pub mod script_trigger;
pub mod shell_sampler;
pub mod system_probe_impl;
pub mod thread_launcher;

pub use process_launcher::ProcessWorkerLauncher;
pub use script_trigger::ScriptAutoscaleTrigger;
pub use shell_sampler::ShellCpuSampler;
pub use system_probe_impl::{SysinfoCpuSampler, SysinfoSystemProbe};
pub use thread_launcher::ThreadWorkerLauncher;
