//! Parse section-assignment pairs such as `2-4,6-8`, one pair per line
//!
//! Reads the file named by the first argument, or a built-in sample when no
//! argument is given, and prints each parsed pair.
//!
//! Run with: cargo run --example section_ranges [input.txt]
//! Set `RUST_LOG=line_scanner=debug` to see which line failed on bad input.

use std::ops::RangeInclusive;

use anyhow::Context;
use line_scanner::{LineScanner, ScanError, parse_lines};

const SAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_range(scanner: &mut LineScanner<'_>) -> Result<RangeInclusive<i32>, ScanError> {
    let start = scanner.read_int()?;
    let end = scanner.move_past("-")?.read_int()?;
    Ok(start..=end)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE.to_string(),
    };

    let pairs = parse_lines(&input, |scanner| {
        let first = read_range(scanner)?;
        scanner.move_past(",")?;
        let second = read_range(scanner)?;
        Ok((first, second))
    })?;

    for (first, second) in &pairs {
        println!("{first:?} and {second:?}");
    }
    println!("{} pairs", pairs.len());
    Ok(())
}
