// Application Layer - Use Cases

pub mod constants;
pub mod monitor;
pub mod stress;
pub mod workload;

// Re-exports
pub use monitor::MonitorService;
pub use stress::{StressOutcome, StressService};
