//! A scheduling policy simulation library.
//!
//! This library provides the process model and the simulators for the
//! FCFS, SJF and Round Robin scheduling policies over a fixed, offline
//! process set on a simulated integer timeline.
//!

use std::num::NonZeroUsize;

mod simulator;

pub use crate::simulator::{AverageMetrics, Process, ProcessTimes, Simulator};

mod schedulers;

use schedulers::{Fcfs, RoundRobin, ShortestJobFirst};

/// Returns a simulator for the First-Come First-Served policy.
///
/// Processes run to completion in input order; the input is assumed to
/// already be sorted by arrival time.
pub fn fcfs() -> impl Simulator {
    Fcfs
}

/// Returns a simulator for the non-preemptive Shortest-Job First policy.
///
/// At each decision point the shortest job among those already arrived
/// is selected; the reordered sequence then runs exactly like FCFS.
pub fn sjf() -> impl Simulator {
    ShortestJobFirst
}

/// Returns a simulator for the preemptive Round Robin policy.
///
/// * `quantum` - the maximum CPU slice a process can run per dispatch
///               before it is preempted and sent to the back of the
///               ready queue.
pub fn round_robin(quantum: NonZeroUsize) -> impl Simulator {
    RoundRobin::new(quantum)
}
