//! A workload loading and reporting library.
//!
//! This is used for feeding offline process sets into the simulators
//! from the [`scheduler`] crate and for formatting their averaged
//! metrics into the report printed by the runner.

use std::error::Error;
use std::fmt::{self, Display, Write};
use std::fs;
use std::io;
use std::path::Path;

use scheduler::{AverageMetrics, Process, ProcessTimes, Simulator};

/// The result of running one policy over a workload.
#[derive(Debug, PartialEq)]
pub struct PolicyResult {
    /// The short name of the policy.
    pub policy: &'static str,

    /// The averaged metrics of the run.
    pub averages: AverageMetrics,

    /// The per-process timing figures, in the simulator's own order.
    pub times: Vec<ProcessTimes>,
}

impl Display for PolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.1} {:.1} {:.1}",
            self.policy,
            self.averages.avg_return_time,
            self.averages.avg_answer_time,
            self.averages.avg_wait_time
        )
    }
}

/// The error returned when a workload cannot be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The workload file could not be read.
    Io(io::Error),

    /// The workload file yielded zero process records.
    Empty,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "cannot read workload file: {err}"),
            LoadError::Empty => write!(f, "workload file holds no process records"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

/// Loads a workload file into a process sequence.
///
/// The file holds whitespace-separated integer pairs, one
/// `(arrival_time, execution_duration)` pair per process, in arrival
/// order. Reading stops at the first token that is not an integer and a
/// trailing unpaired value is dropped. Inputs are trusted: arrival times
/// are assumed non-negative and durations strictly positive, neither is
/// validated.
///
/// * `path` - the path of the workload file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Process>, LoadError> {
    let contents = fs::read_to_string(path)?;
    let mut values = contents
        .split_whitespace()
        .map_while(|token| token.parse::<usize>().ok());

    let mut processes = Vec::new();
    while let (Some(arrival), Some(duration)) = (values.next(), values.next()) {
        processes.push(Process::new(arrival, duration));
    }

    if processes.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(processes)
}

/// Runs one policy simulator over a workload.
///
/// The workload itself is never modified, so the same slice can be fed
/// to every policy in turn.
///
/// * `simulator` - the policy simulator to run.
/// * `processes` - the workload, in arrival order.
pub fn run_policy<S: Simulator>(simulator: &S, processes: &[Process]) -> PolicyResult {
    let times = simulator.run(processes);
    let averages = AverageMetrics::from_times(&times);

    #[cfg(feature = "output")]
    print_trace(simulator.name(), &times);

    PolicyResult {
        policy: simulator.name(),
        averages,
        times,
    }
}

#[cfg(feature = "output")]
fn print_trace(policy: &str, times: &[ProcessTimes]) {
    println!("===== {policy} =====");
    println!("START\tEND\tRETURN\tANSWER\tWAIT");
    for derived in times {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            derived.exec_start_time,
            derived.completion_time,
            derived.return_time,
            derived.answer_time,
            derived.wait_time
        );
    }
}

/// Formats the policy results to a [`String`], one line per policy.
///
/// * `results` - the results returned by [`run_policy`].
pub fn format_report(results: &[PolicyResult]) -> String {
    let mut s = String::new();
    for result in results {
        writeln!(s, "{result}").unwrap();
    }
    s
}
