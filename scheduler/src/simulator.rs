use std::fmt::{self, Display};

/// An offline process record.
///
/// A process is described only by the instant it becomes runnable and the
/// total CPU time it needs, both expressed on the simulated integer
/// timeline. Records are trusted input: `execution_duration` is assumed
/// to be strictly positive and is not validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Process {
    /// The instant the process becomes runnable.
    pub arrival_time: usize,

    /// The total CPU time the process needs in order to finish.
    pub execution_duration: usize,
}

impl Process {
    /// Creates a new process record.
    ///
    /// * `arrival_time` - the instant the process becomes runnable.
    /// * `execution_duration` - the total CPU time the process needs.
    pub fn new(arrival_time: usize, execution_duration: usize) -> Process {
        Process {
            arrival_time,
            execution_duration,
        }
    }
}

impl Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arrival {}, duration {}",
            self.arrival_time, self.execution_duration
        )
    }
}

/// The timing figures derived for one process by a simulator run.
///
/// The fields obey:
/// - `return_time = completion_time - arrival_time`
/// - `wait_time = return_time - execution_duration`
/// - `answer_time = exec_start_time - arrival_time`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessTimes {
    /// The first instant the process received the CPU.
    pub exec_start_time: usize,

    /// The instant the process finished executing.
    pub completion_time: usize,

    /// Turnaround: the time from arrival to completion.
    pub return_time: usize,

    /// The time spent runnable but off the CPU.
    pub wait_time: usize,

    /// Response: the time from arrival to the first dispatch.
    pub answer_time: usize,
}

impl ProcessTimes {
    /// Derives the figures for a process that first ran at
    /// `exec_start_time` and finished at `completion_time`.
    pub(crate) fn derive(
        process: &Process,
        exec_start_time: usize,
        completion_time: usize,
    ) -> ProcessTimes {
        let return_time = completion_time - process.arrival_time;
        ProcessTimes {
            exec_start_time,
            completion_time,
            return_time,
            wait_time: return_time - process.execution_duration,
            answer_time: exec_start_time - process.arrival_time,
        }
    }
}

/// The averaged metrics of one simulator run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AverageMetrics {
    /// Average turnaround time.
    pub avg_return_time: f64,

    /// Average response time.
    pub avg_answer_time: f64,

    /// Average waiting time.
    pub avg_wait_time: f64,
}

impl AverageMetrics {
    /// Averages the derived figures of a whole run.
    ///
    /// Returns all-zero metrics for an empty run.
    pub fn from_times(times: &[ProcessTimes]) -> AverageMetrics {
        if times.is_empty() {
            return AverageMetrics {
                avg_return_time: 0.0,
                avg_answer_time: 0.0,
                avg_wait_time: 0.0,
            };
        }

        let mut return_time_sum = 0;
        let mut answer_time_sum = 0;
        let mut wait_time_sum = 0;
        for derived in times {
            return_time_sum += derived.return_time;
            answer_time_sum += derived.answer_time;
            wait_time_sum += derived.wait_time;
        }

        let count = times.len() as f64;
        AverageMetrics {
            avg_return_time: return_time_sum as f64 / count,
            avg_answer_time: answer_time_sum as f64 / count,
            avg_wait_time: wait_time_sum as f64 / count,
        }
    }
}

/// The trait that any scheduling policy simulator has to implement.
///
/// Simulators are stateless between runs and independent of each other:
/// the same workload slice can be fed to every policy in turn.
pub trait Simulator {
    /// Returns the short name of the policy, used when reporting results.
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes` and returns the derived
    /// timing figures, one entry per process.
    ///
    /// The caller's records are never modified; each simulator works on
    /// its own copy and may reorder it, so the entries follow the
    /// simulator's own dispatch order rather than the input order.
    fn run(&self, processes: &[Process]) -> Vec<ProcessTimes>;
}
