// Host Info - static summary of the machine the service runs on

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    pub hostname: String,
    pub platform: String,
    pub architecture: String,
    pub cpus: usize,
    pub uptime_secs: u64,
    pub load_average: LoadAverage,
    pub memory: MemorySummary,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemorySummary {
    pub total_mb: u64,
    pub free_mb: u64,
    pub used_mb: u64,
    pub used_percent: u64,
}

impl MemorySummary {
    /// Build from raw byte counts
    pub fn from_bytes(total_bytes: u64, free_bytes: u64) -> Self {
        const MB: u64 = 1024 * 1024;
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        let used_percent = if total_bytes == 0 {
            0
        } else {
            ((used_bytes as f64 / total_bytes as f64) * 100.0).round() as u64
        };

        Self {
            total_mb: total_bytes / MB,
            free_mb: free_bytes / MB,
            used_mb: used_bytes / MB,
            used_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_summary_from_bytes() {
        let mb = 1024 * 1024;
        let summary = MemorySummary::from_bytes(4096 * mb, 1024 * mb);

        assert_eq!(summary.total_mb, 4096);
        assert_eq!(summary.free_mb, 1024);
        assert_eq!(summary.used_mb, 3072);
        assert_eq!(summary.used_percent, 75);
    }

    #[test]
    fn test_memory_summary_zero_total() {
        let summary = MemorySummary::from_bytes(0, 0);
        assert_eq!(summary.used_percent, 0);
    }
}
