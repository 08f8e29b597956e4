//! The scheduling policy simulators, one file per policy.

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::ShortestJobFirst;

mod round_robin;
pub use round_robin::RoundRobin;
