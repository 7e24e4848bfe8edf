// Domain Layer - Pure value types, no side effects

pub mod error;
pub mod host;
pub mod sample;
pub mod stress;

// Re-exports
pub use error::DomainError;
pub use host::{HostInfo, LoadAverage, MemorySummary};
pub use sample::CpuSample;
pub use stress::{LaunchReport, StressRequest, WorkerCount};
