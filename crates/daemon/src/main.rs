//! CPU Stress Service - Main Entry Point
//! HTTP control surface over detached CPU burners and a CPU-driven autoscale hook

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use cpu_stress_api_http::{AppState, HttpServer};
use cpu_stress_core::application::constants::BURN_BATCH_SIZE;
use cpu_stress_core::application::workload::run_worker;
use cpu_stress_core::port::{CpuSampler, SystemProbe, WorkerLauncher};
use cpu_stress_infra_system::{
    ProcessWorkerLauncher, ScriptAutoscaleTrigger, ShellCpuSampler, SysinfoCpuSampler,
    SysinfoSystemProbe, ThreadWorkerLauncher,
};

use config::{Cli, Command, LogFormat, SamplerKind, WorkerMode};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    init_logging(cli.log_format)?;

    // 2. Worker child: burn, never serve
    if let Some(Command::Burn) = cli.command {
        run_worker(BURN_BATCH_SIZE);
    }

    // 3. Serve on the multi-threaded runtime
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(serve(cli))
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("cpu_stress=info"))
        .context("Failed to create env filter")?;

    let installed = match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()
        }
    };

    installed.context("Failed to install tracing subscriber")
}

async fn serve(cli: Cli) -> Result<()> {
    info!("CPU Stress Service v{} starting...", VERSION);

    // 1. Setup dependencies (DI wiring)
    let system_probe: Arc<dyn SystemProbe> = Arc::new(SysinfoSystemProbe::new());

    let sampler: Arc<dyn CpuSampler> = match cli.sampler {
        SamplerKind::Shell => Arc::new(ShellCpuSampler::new()),
        SamplerKind::Native => Arc::new(SysinfoCpuSampler::new()),
    };

    let launcher: Arc<dyn WorkerLauncher> = match cli.worker_mode {
        WorkerMode::Thread => Arc::new(ThreadWorkerLauncher::new()),
        WorkerMode::Process => Arc::new(
            ProcessWorkerLauncher::from_current_exe()
                .context("Failed to locate current executable")?,
        ),
    };

    let trigger = Arc::new(ScriptAutoscaleTrigger::new(&cli.autoscale_script));

    info!(
        cpus = system_probe.logical_cpus(),
        sampler = ?cli.sampler,
        worker_mode = launcher.kind(),
        autoscale_script = %trigger.program().display(),
        "Dependencies wired"
    );

    let state = AppState::new(launcher, sampler, trigger, system_probe);

    // 2. Start HTTP server
    let handle = HttpServer::new(cli.http_config(), state)
        .start()
        .await
        .context("HTTP server start failed")?;

    info!(addr = %handle.local_addr(), "✅ System ready. Waiting for requests...");
    info!("Press Ctrl+C to shutdown");

    // 3. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 4. Graceful shutdown; stress workers die with the process
    handle.stop();
    match tokio::time::timeout(SHUTDOWN_GRACE_PERIOD, handle.stopped()).await {
        Ok(result) => result.context("HTTP server failed")?,
        Err(_) => tracing::warn!("In-flight requests did not finish in time"),
    }

    info!("Shutdown complete.");

    Ok(())
}
