// Service constants (No magic values)

/// CPU usage above which the autoscale trigger fires (percent, strict)
pub const AUTOSCALE_CPU_THRESHOLD: f64 = 75.0;

/// sin*cos*sqrt evaluations per burn batch
pub const BURN_BATCH_SIZE: u64 = 50_000_000;

/// Default autoscale executable, relative to the working directory
pub const DEFAULT_AUTOSCALE_SCRIPT: &str = "./autoscale_gcp.sh";

/// Text returned by GET /
pub const WELCOME_MESSAGE: &str =
    "Welcome to the CPU Stress Test Application! Use /stress to load CPU.";

/// Error body for a failed /monitor sample
pub const CPU_USAGE_ERROR_MESSAGE: &str = "Failed to retrieve CPU usage";

/// Error body when no worker could be started
pub const LAUNCH_ERROR_MESSAGE: &str = "Failed to start CPU-intensive processes";
