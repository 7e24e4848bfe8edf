//! Command-line and environment configuration
//!
//! Every flag falls back to a `CPU_STRESS_*` variable, then to a default.

use clap::{Parser, Subcommand, ValueEnum};
use cpu_stress_api_http::HttpServerConfig;
use cpu_stress_core::application::constants::DEFAULT_AUTOSCALE_SCRIPT;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Parser, Debug)]
#[command(name = "cpu-stress")]
#[command(about = "CPU stress test service with CPU-driven autoscaling", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to bind
    #[arg(long, env = "CPU_STRESS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "CPU_STRESS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// CPU usage source for /monitor
    #[arg(long, env = "CPU_STRESS_SAMPLER", value_enum, default_value_t = SamplerKind::Shell)]
    pub sampler: SamplerKind,

    /// How /stress runs its workers
    #[arg(long, env = "CPU_STRESS_WORKER_MODE", value_enum, default_value_t = WorkerMode::Thread)]
    pub worker_mode: WorkerMode,

    /// Executable run when CPU usage is above the threshold
    #[arg(long, env = "CPU_STRESS_AUTOSCALE_SCRIPT", default_value = DEFAULT_AUTOSCALE_SCRIPT)]
    pub autoscale_script: String,

    /// Log output format
    #[arg(long, env = "CPU_STRESS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Burn one CPU core forever (spawned by the process worker mode)
    #[command(hide = true)]
    Burn,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerKind {
    /// `top` pipeline through `sh -c`
    Shell,
    /// sysinfo counters
    Native,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerMode {
    Thread,
    Process,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}
