use crate::{Process, ProcessTimes, Simulator};

/// First-Come First-Served: non-preemptive, processes run to completion
/// in input (arrival) order.
pub struct Fcfs;

impl Simulator for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> Vec<ProcessTimes> {
        timeline(processes)
    }
}

/// Runs the non-preemptive timeline over `processes` in the given order.
///
/// The clock starts at 0 and advances over each process in turn. A process
/// arriving after the clock leaves an idle gap: the clock jumps to its
/// arrival and the process waits nothing. The first process therefore never
/// waits, whatever its arrival time. Shared with the SJF simulator, which
/// replays this exact timeline on its reordered sequence.
pub(crate) fn timeline(processes: &[Process]) -> Vec<ProcessTimes> {
    let mut times = Vec::with_capacity(processes.len());
    let mut elapsed_time = 0;

    for process in processes {
        if elapsed_time < process.arrival_time {
            // Idle gap: only the gap itself elapses.
            elapsed_time = process.arrival_time;
        }

        let exec_start_time = elapsed_time;
        elapsed_time += process.execution_duration;
        times.push(ProcessTimes::derive(process, exec_start_time, elapsed_time));
    }

    times
}
