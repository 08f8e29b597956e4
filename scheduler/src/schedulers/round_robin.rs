use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::{Process, ProcessTimes, Simulator};

/// Round Robin: preemptive, fixed quantum, FIFO ready queue.
///
/// Process identity is positional: the per-process trackers are plain
/// arrays indexed by the position in the arrival-sorted working copy, so
/// two records with identical times stay distinct scheduling entities.
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    /// Creates a Round Robin simulator with the given quantum.
    ///
    /// * `quantum` - the maximum CPU slice granted per dispatch before
    ///               the process is preempted.
    pub fn new(quantum: NonZeroUsize) -> RoundRobin {
        RoundRobin { quantum }
    }
}

impl Simulator for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> Vec<ProcessTimes> {
        if processes.is_empty() {
            return Vec::new();
        }

        let mut working: Vec<Process> = processes.to_vec();
        working.sort_by_key(|process| process.arrival_time);

        let count = working.len();
        let quantum = self.quantum.get();

        let mut remaining: Vec<usize> = working
            .iter()
            .map(|process| process.execution_duration)
            .collect();
        let mut in_queue = vec![false; count];
        let mut exec_start = vec![0; count];
        let mut times = Vec::with_capacity(count);

        // The earliest-sorted process is seeded unconditionally, even when
        // it arrives after time 0; the first-dispatch correction below
        // absorbs the initial gap.
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);
        in_queue[0] = true;

        let mut elapsed_time = 0;

        while let Some(index) = queue.pop_front() {
            let process = working[index];

            // First dispatch: move the clock up over any idle gap.
            if remaining[index] == process.execution_duration {
                exec_start[index] = elapsed_time.max(process.arrival_time);
                elapsed_time = exec_start[index];
            }

            let slice = quantum.min(remaining[index]);
            elapsed_time += slice;
            remaining[index] -= slice;

            if remaining[index] == 0 {
                times.push(ProcessTimes::derive(
                    &process,
                    exec_start[index],
                    elapsed_time,
                ));
            }

            // Admission pass, in ascending index order. New arrivals join
            // ahead of the preempted process's re-entry below. The flags
            // are never cleared, so a process is admitted exactly once.
            for other in 0..count {
                if remaining[other] > 0
                    && !in_queue[other]
                    && working[other].arrival_time <= elapsed_time
                {
                    queue.push_back(other);
                    in_queue[other] = true;
                }
            }

            if remaining[index] > 0 {
                queue.push_back(index);
            }

            // Idle gap: nothing admissible has arrived yet, pull in the
            // first unfinished process by index.
            if queue.is_empty() {
                if let Some(next) = (0..count).find(|&other| remaining[other] > 0) {
                    queue.push_back(next);
                    in_queue[next] = true;
                }
            }
        }

        times
    }
}
