//! Lagmark Engine - concurrent probe execution
//!
//! This crate provides:
//! - The probe runner: one subprocess attempt under a hard deadline, with
//!   exit-code classification and output parsing
//! - The aggregator: sequential attempts for one probe folded into a report
//! - The worker pool: bounded concurrent execution across probes

pub mod aggregate;
pub mod pool;
pub mod runner;

// Re-export primary types
pub use aggregate::run_probe;
pub use pool::{run_probes, MAX_WORKERS};
pub use runner::{run_attempt, AttemptOutcome};
