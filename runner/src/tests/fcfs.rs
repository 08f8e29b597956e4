use pretty_assertions::assert_eq;
use scheduler::{fcfs, Simulator};

use super::{averages, processes};

#[test]
pub fn single_process() {
    let avg = averages(&fcfs(), &processes(&[(0, 5)]));

    assert_eq!(avg.avg_return_time, 5.0);
    assert_eq!(avg.avg_answer_time, 0.0);
    assert_eq!(avg.avg_wait_time, 0.0);
}

#[test]
pub fn two_processes_no_gap() {
    let avg = averages(&fcfs(), &processes(&[(0, 4), (0, 3)]));

    assert_eq!(avg.avg_return_time, 5.5);
    assert_eq!(avg.avg_wait_time, 2.0);
    // Non-preemptive: response equals wait.
    assert_eq!(avg.avg_answer_time, avg.avg_wait_time);
}

#[test]
pub fn idle_gap_is_not_waited_for() {
    let avg = averages(&fcfs(), &processes(&[(0, 3), (10, 2)]));

    assert_eq!(avg.avg_wait_time, 0.0);
    assert_eq!(avg.avg_return_time, 2.5);
}

#[test]
pub fn first_process_never_waits() {
    // The clock starts at the first arrival, even when it is late.
    let avg = averages(&fcfs(), &processes(&[(3, 4)]));

    assert_eq!(avg.avg_return_time, 4.0);
    assert_eq!(avg.avg_answer_time, 0.0);
    assert_eq!(avg.avg_wait_time, 0.0);
}

#[test]
pub fn derived_times_follow_the_formulas() {
    let workload = processes(&[(0, 4), (1, 3), (2, 2)]);
    let times = fcfs().run(&workload);

    assert_eq!(times.len(), workload.len());
    for (process, derived) in workload.iter().zip(&times) {
        assert_eq!(derived.return_time, derived.completion_time - process.arrival_time);
        assert_eq!(derived.wait_time, derived.return_time - process.execution_duration);
        assert_eq!(derived.answer_time, derived.exec_start_time - process.arrival_time);
    }
}
