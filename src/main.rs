//! Great-circle distance calculator CLI - entry point.

mod cli;
mod data;
mod error;
mod output;

use geodist::distance;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok((source, params)) => {
            // Performance monitoring setup
            let start = if params.perf {
                Some(std::time::Instant::now())
            } else {
                None
            };

            let pairs = match data::expand_source(source) {
                Ok(stream) => stream,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            let results = pairs.map(|pair| {
                pair.and_then(|(raw1, raw2)| {
                    distance::calculate_pair(&raw1, &raw2).map_err(|err| err.to_string())
                })
            });

            let record_count = match output::dispatch_output(results, &params) {
                Ok(count) => count,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            // Report performance if requested
            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Processed {} records in {:.3}s ({:.0} records/sec)",
                    record_count,
                    elapsed.as_secs_f64(),
                    record_count as f64 / elapsed.as_secs_f64()
                );
            }
        }
        Err(error::CliError::Exit(message)) => {
            println!("{}", message);
            std::process::exit(0);
        }
        Err(error::CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}
