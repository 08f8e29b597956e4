use std::env;
use std::io;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use scheduler::{fcfs, round_robin, sjf};
use workload::{format_report, run_policy};

fn main() -> ExitCode {
    let mut path = String::new();
    if io::stdin().read_line(&mut path).is_err() {
        eprintln!("Error reading the workload path!");
        return ExitCode::FAILURE;
    }

    let processes = match workload::load(path.trim()) {
        Ok(processes) => processes,
        Err(err) => {
            eprintln!("Error opening file: {err}");
            return ExitCode::FAILURE;
        }
    };

    let results = [
        run_policy(&fcfs(), &processes),
        run_policy(&sjf(), &processes),
        run_policy(&round_robin(quantum()), &processes),
    ];

    print!("{}", format_report(&results));
    ExitCode::SUCCESS
}

/// The Round Robin quantum, taken from the `QUANTUM` environment
/// variable. Defaults to 2 time units.
fn quantum() -> NonZeroUsize {
    let quantum = env::var("QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<usize>()
        .unwrap();
    NonZeroUsize::new(quantum).unwrap()
}

#[cfg(test)]
mod tests;
