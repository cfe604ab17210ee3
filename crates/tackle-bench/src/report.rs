//! Wall-clock timing of queries and a plain-text report.

use std::time::{Duration, Instant};

use tackle_core::QueryError;
use tackle_dataset::Fixture;
use tackle_query::{Complexity, Disagreement, LookupQuery};

/// Timed samples for one query.
#[derive(Debug, Clone)]
pub struct QueryTiming {
    pub name: String,
    pub complexity: Complexity,
    /// Result of the last sampled run, `None` until a sample is taken.
    pub result: Option<Result<u8, QueryError>>,
    pub durations: Vec<Duration>,
}

impl QueryTiming {
    pub fn new(name: &str, complexity: Complexity) -> Self {
        Self {
            name: name.to_string(),
            complexity,
            result: None,
            durations: Vec::new(),
        }
    }

    pub fn add_sample(&mut self, elapsed: Duration, result: Result<u8, QueryError>) {
        self.durations.push(elapsed);
        self.result = Some(result);
    }

    pub fn mean_us(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.durations.iter().map(|d| d.as_secs_f64() * 1e6).sum();
        sum / self.durations.len() as f64
    }

    pub fn percentile_us(&self, pct: f64) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let mut sorted = self.durations.clone();
        sorted.sort_unstable();
        let idx = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)].as_secs_f64() * 1e6
    }
}

/// Samples to take for a query of the given cost at the reference size.
///
/// The cubic query runs for hundreds of milliseconds per call, so it gets
/// a handful of samples where the constant-time query gets thousands.
pub fn sample_count(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Constant => 10_000,
        Complexity::Linear => 1_000,
        Complexity::Quadratic => 100,
        Complexity::Cubic => 3,
    }
}

/// Run `query` `warmup` times untimed, then `samples` times timed.
pub fn measure(
    query: &dyn LookupQuery,
    fixture: &Fixture,
    warmup: u32,
    samples: u32,
) -> QueryTiming {
    for _ in 0..warmup {
        let _ = std::hint::black_box(query.run(fixture));
    }

    let mut timing = QueryTiming::new(query.name(), query.complexity());
    for _ in 0..samples {
        let start = Instant::now();
        let result = std::hint::black_box(query.run(fixture));
        timing.add_sample(start.elapsed(), result);
    }
    log::debug!(
        "measured {}: {} samples, mean {:.2}µs",
        timing.name,
        timing.durations.len(),
        timing.mean_us()
    );
    timing
}

/// Print a per-query timing table followed by the agreement verdict.
pub fn print_report(size: u32, timings: &[QueryTiming], agreement: &Result<(), Disagreement>) {
    println!("\n{}", "=".repeat(80));
    println!("  Lookup Strategy Report (N = {size})");
    println!("{}", "=".repeat(80));
    println!(
        "  {:28} {:>6} {:>8} {:>12} {:>12} {:>12}",
        "Query", "Cost", "Result", "Mean (µs)", "p50 (µs)", "p95 (µs)"
    );
    println!("  {}", "-".repeat(78));

    for t in timings {
        let result = match &t.result {
            Some(Ok(v)) => v.to_string(),
            Some(Err(_)) => "error".to_string(),
            None => "-".to_string(),
        };
        println!(
            "  {:28} {:>6} {:>8} {:>12.2} {:>12.2} {:>12.2}",
            t.name,
            t.complexity.to_string(),
            result,
            t.mean_us(),
            t.percentile_us(50.0),
            t.percentile_us(95.0),
        );
    }

    for t in timings {
        if let Some(Err(e)) = &t.result {
            println!("\n  {} failed: {e}", t.name);
        }
    }

    println!("{}", "=".repeat(80));
    match agreement {
        Ok(()) => println!("  Verdict: every family agrees"),
        Err(d) => println!("  Verdict: MISMATCH, {d}"),
    }
    println!();
}
