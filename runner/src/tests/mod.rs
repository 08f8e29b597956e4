use std::env;
use std::fs;

use scheduler::{AverageMetrics, Process, Simulator};

use super::quantum;

mod fcfs;

/// Builds a process sequence from `(arrival_time, execution_duration)`
/// pairs.
fn processes(records: &[(usize, usize)]) -> Vec<Process> {
    records
        .iter()
        .map(|&(arrival, duration)| Process::new(arrival, duration))
        .collect()
}

fn averages(simulator: &impl Simulator, processes: &[Process]) -> AverageMetrics {
    AverageMetrics::from_times(&simulator.run(processes))
}

fn write_report(folder: &str, name: &str, report: &str) {
    let quantum = quantum();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}___{quantum}.log"), report).unwrap();
}

fn read_report(folder: &str, name: &str) -> String {
    let quantum = quantum();
    fs::read_to_string(format!("../outputs/{folder}/{name}___{quantum}.log")).unwrap()
}

fn check(folder: &str, name: &str, report: &str) {
    if env::var("WRITE_OUTPUT").is_ok() {
        write_report(folder, name, report);
    } else {
        let reference = read_report(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, report);
    }
}
