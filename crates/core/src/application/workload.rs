// The CPU-burning body of a WorkerTask

use std::hint::black_box;
use tracing::info;

/// One batch of transcendental evaluations
///
/// The accumulator goes through `black_box` so the loop survives optimization.
pub fn burn_batch(size: u64) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..size {
        let x = black_box(i as f64);
        acc += x.sin() * x.cos() * x.sqrt();
    }
    black_box(acc)
}

/// Burn batches forever, never yielding or sleeping
pub fn burn_forever(batch_size: u64) -> ! {
    loop {
        black_box(burn_batch(batch_size));
    }
}

/// Entry point of a WorkerTask (thread body or `burn` subcommand)
pub fn run_worker(batch_size: u64) -> ! {
    info!(
        pid = std::process::id(),
        thread = ?std::thread::current().name(),
        "Starting intensive CPU stress task"
    );
    burn_forever(batch_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_batch_empty() {
        assert_eq!(burn_batch(0), 0.0);
    }

    #[test]
    fn test_burn_batch_matches_formula() {
        let expected: f64 = (0..1_000u64)
            .map(|i| {
                let x = i as f64;
                x.sin() * x.cos() * x.sqrt()
            })
            .sum();
        let got = burn_batch(1_000);
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn test_burn_forever_keeps_running() {
        let handle = std::thread::spawn(|| burn_forever(1_000));
        std::thread::sleep(std::time::Duration::from_millis(50));

        // Never finishes on its own; the thread is left detached
        assert!(!handle.is_finished());
    }
}
