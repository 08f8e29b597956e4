use super::fcfs;
use crate::{Process, ProcessTimes, Simulator};

/// Shortest-Job First: non-preemptive, the shortest already-arrived job
/// is selected at each decision point.
///
/// Reorders a working copy of the process set and replays the FCFS
/// timeline on it, so gap handling stays identical between the two
/// policies.
pub struct ShortestJobFirst;

impl Simulator for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> Vec<ProcessTimes> {
        fcfs::timeline(&reorder(processes))
    }
}

/// Builds the SJF dispatch order.
///
/// At each decision point the clock is the sum of the durations already
/// placed. Among the processes that have arrived by then, the shortest is
/// placed next; duration ties keep the original order. When none has
/// arrived yet (an idle gap), the next process in original order is placed
/// unchanged.
fn reorder(processes: &[Process]) -> Vec<Process> {
    let mut pool: Vec<Process> = processes.to_vec();
    let mut ordered = Vec::with_capacity(pool.len());
    let mut elapsed_time = 0;

    while !pool.is_empty() {
        let next = pool
            .iter()
            .enumerate()
            .filter(|(_, process)| process.arrival_time <= elapsed_time)
            .min_by_key(|&(index, process)| (process.execution_duration, index))
            .map(|(index, _)| index)
            .unwrap_or(0);

        let process = pool.remove(next);
        elapsed_time += process.execution_duration;
        ordered.push(process);
    }

    ordered
}
