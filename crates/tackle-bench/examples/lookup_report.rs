//! Standalone runner that times every lookup query and prints a report.
//!
//! Demonstrates: build fixture → run suite once for agreement → time each
//! query with a cost-scaled sample count → print table.
//!
//! Usage:
//!   cargo run --release --example lookup_report            # N = 999
//!   cargo run --release --example lookup_report -- 3000    # explicit N
//!   TACKLE_LOG=debug cargo run --release --example lookup_report

use std::error::Error;
use std::str::FromStr;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use tackle_bench::report::{measure, print_report, sample_count};
use tackle_bench::REFERENCE_SIZE;
use tackle_dataset::Fixture;
use tackle_query::{LookupQuery, QuerySuite};

const WARMUP_RUNS: u32 = 1;

fn init_logging() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("TACKLE_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Info);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let size = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u32>()?,
        None => REFERENCE_SIZE,
    };

    println!("=== Tackle Lookup Report ===\n");
    let fixture = Fixture::with_size(size)?;
    let suite = QuerySuite::standard();

    let outcomes = suite.run(&fixture);
    let agreement = QuerySuite::verify_agreement(&outcomes);
    if let Err(d) = &agreement {
        log::error!("{d}");
    }

    let mut timings = Vec::with_capacity(suite.len());
    for query in suite.queries() {
        let samples = sample_count(query.complexity());
        eprint!("  Timing {} ({samples} samples)...", query.name());
        let timing = measure(query.as_ref(), &fixture, WARMUP_RUNS, samples);
        eprintln!(" done ({:.2}µs mean)", timing.mean_us());
        timings.push(timing);
    }

    print_report(size, &timings, &agreement);
    Ok(())
}
