// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bulwark
//!
//! Runs the overflow and underflow probes for every selected primitive type,
//! records each detected boundary violation in a SQLite `logs` table and
//! prints the table afterwards.
//!
//! ```text
//! bulwark --steps 5 --types i8,u32,f64 --database overflows.sqlite
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for per-step records) for diagnostics.

mod driver;

use crate::driver::{Domain, Driver};
use bulwark_accumulator::probe::{BoundaryProbe, DEFAULT_PROBE_STEPS, ProbeConfigBuilder};
use bulwark_sink::sqlite::SqliteSink;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bulwark", version, about)]
struct Args {
    /// Steps per probe; the second evaluation of every probe uses one more.
    #[arg(short, long, default_value_t = DEFAULT_PROBE_STEPS)]
    steps: u64,

    /// SQLite database receiving detected events. In memory when omitted.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Comma separated list of types to probe. All primitives when omitted.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    types: Vec<Domain>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let sink = match &args.database {
        Some(path) => SqliteSink::open(path)?,
        None => SqliteSink::open_in_memory()?,
    };

    let domains = if args.types.is_empty() {
        Domain::ALL.to_vec()
    } else {
        args.types.clone()
    };

    let probe = BoundaryProbe::new(ProbeConfigBuilder::new().steps(args.steps).build());
    let stdout = std::io::stdout();
    let mut driver = Driver::new(probe, &sink, stdout.lock());
    driver.run_all(&domains)?;
    let summary = driver.finish()?;
    log::info!(
        "{} evaluations, {} events recorded",
        summary.statistics.evaluations,
        summary.recorded
    );

    println!();
    println!("Recorded events:");
    for entry in sink.entries()? {
        println!("{}", entry);
    }

    Ok(())
}
