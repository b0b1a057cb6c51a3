use crate::runner::{run_attempt, AttemptOutcome};
use lagmark_core::{format_duration, ProbeReport, ProbeSpec};
use tracing::debug;

const PARSE_FAILURE_MSG: &str = "Failed to parse output of curl command";
const CONNECT_FAILURE_MSG: &str = "error: Failed to connect to server";
const EMPTY_RESPONSE_MSG: &str = "error: Failed to get a response back from server";

/// Run every attempt for one probe and fold the outcomes into a report.
///
/// Attempts run sequentially with the same command and timeout; entry `i`
/// of the report vectors describes attempt `i`. Infallible: every
/// attempt-level failure becomes a descriptive string at its index and a
/// failure-count increment, and never aborts the remaining attempts.
pub async fn run_probe(spec: &ProbeSpec) -> ProbeReport {
    let count = spec.resolved_count();
    let timeout_secs = spec.resolved_timeout();

    let mut response_times = vec![String::new(); count as usize];
    let mut status_codes = vec![String::new(); count as usize];
    let mut total = 0.0;
    let mut successes = 0u32;

    for i in 0..count as usize {
        let outcome = run_attempt(&spec.command, timeout_secs).await;
        debug!("Probe '{}' attempt {}: {:?}", spec.name, i, outcome);

        match outcome {
            AttemptOutcome::Success {
                elapsed_secs,
                status_code,
            } => {
                response_times[i] = format_duration(elapsed_secs);
                status_codes[i] = status_code;
                total += elapsed_secs;
                successes += 1;
            }
            AttemptOutcome::TimedOut { limit_secs } => {
                response_times[i] = format!("Timeout (> {}s)", limit_secs);
            }
            AttemptOutcome::ConnectionRefused => {
                response_times[i] = CONNECT_FAILURE_MSG.to_string();
            }
            AttemptOutcome::EmptyResponse => {
                response_times[i] = EMPTY_RESPONSE_MSG.to_string();
            }
            AttemptOutcome::CommandFailed { message } => {
                response_times[i] = format!("error: {}", message);
            }
            AttemptOutcome::UnparsableShape { .. } => {
                response_times[i] = PARSE_FAILURE_MSG.to_string();
                status_codes[i] = PARSE_FAILURE_MSG.to_string();
            }
            AttemptOutcome::UnparsableTime { .. } => {
                response_times[i] = PARSE_FAILURE_MSG.to_string();
            }
        }
    }

    let average = if successes > 0 {
        format_duration(total / successes as f64)
    } else {
        format_duration(0.0)
    };

    ProbeReport {
        name: spec.name.clone(),
        status_codes,
        response_times,
        average,
        failures: count - successes,
    }
}
