use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Outcome of a single probe attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Command exited 0 and printed a parseable `<seconds> <status>` pair
    Success {
        elapsed_secs: f64,
        status_code: String,
    },
    /// Deadline elapsed before the command exited
    TimedOut { limit_secs: u64 },
    /// Exit code 7
    ConnectionRefused,
    /// Exit code 52
    EmptyResponse,
    /// Any other non-zero exit, or the spawn itself failed
    CommandFailed { message: String },
    /// Stdout was not exactly two space-separated tokens
    UnparsableShape { raw: String },
    /// The first stdout token was not a float
    UnparsableTime { raw: String },
}

/// Run one probe attempt under a hard wall-clock deadline.
///
/// Spawns `bash -c <command>` with output captured. If the deadline fires
/// before the command exits, the subprocess is killed and the attempt is
/// classified as timed out regardless of any eventual exit code.
pub async fn run_attempt(command: &str, timeout_secs: u64) -> AttemptOutcome {
    debug!("Executing: bash -c {}", command);

    let child = Command::new("bash")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            return AttemptOutcome::CommandFailed {
                message: e.to_string(),
            }
        }
    };

    let wait = timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await;
    let output = match wait {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return AttemptOutcome::CommandFailed {
                message: e.to_string(),
            }
        }
        // The dropped wait future kills the child via kill_on_drop
        Err(_) => {
            return AttemptOutcome::TimedOut {
                limit_secs: timeout_secs,
            }
        }
    };

    let exit_code = output.status.code().unwrap_or(-1);
    debug!("Command exited with code {}: {}", exit_code, command);

    if exit_code != 0 {
        return classify_exit(exit_code, &output.stderr);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_output(stdout.trim())
}

/// Map a non-zero exit code to its failure class.
///
/// Codes 7 and 52 are curl's connect-failure and empty-reply exits; they
/// get fixed classifications so the report can render stable messages.
fn classify_exit(exit_code: i32, stderr: &[u8]) -> AttemptOutcome {
    match exit_code {
        7 => AttemptOutcome::ConnectionRefused,
        52 => AttemptOutcome::EmptyResponse,
        _ => {
            let stderr = String::from_utf8_lossy(stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("exit status {}", exit_code)
            } else {
                format!("exit status {}: {}", exit_code, stderr)
            };
            AttemptOutcome::CommandFailed { message }
        }
    }
}

/// Parse the `<float-seconds> <status-token>` contract from trimmed stdout
fn parse_output(stdout: &str) -> AttemptOutcome {
    let parts: Vec<&str> = stdout.split(' ').collect();
    if parts.len() != 2 {
        return AttemptOutcome::UnparsableShape {
            raw: stdout.to_string(),
        };
    }

    match parts[0].parse::<f64>() {
        Ok(elapsed_secs) => AttemptOutcome::Success {
            elapsed_secs,
            status_code: parts[1].to_string(),
        },
        Err(_) => AttemptOutcome::UnparsableTime {
            raw: stdout.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_parses_time_and_status() {
        let outcome = run_attempt("echo '0.25 200'", 5).await;
        assert_eq!(
            outcome,
            AttemptOutcome::Success {
                elapsed_secs: 0.25,
                status_code: "200".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let outcome = run_attempt("printf '  0.5 301\\n\\n'", 5).await;
        assert_eq!(
            outcome,
            AttemptOutcome::Success {
                elapsed_secs: 0.5,
                status_code: "301".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_exit_code_7_is_connection_refused() {
        let outcome = run_attempt("exit 7", 5).await;
        assert_eq!(outcome, AttemptOutcome::ConnectionRefused);
    }

    #[tokio::test]
    async fn test_exit_code_52_is_empty_response() {
        let outcome = run_attempt("exit 52", 5).await;
        assert_eq!(outcome, AttemptOutcome::EmptyResponse);
    }

    #[tokio::test]
    async fn test_other_exit_codes_are_generic_failures() {
        let outcome = run_attempt("exit 3", 5).await;
        match outcome {
            AttemptOutcome::CommandFailed { message } => {
                assert!(message.contains("exit status 3"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_message_carries_stderr() {
        let outcome = run_attempt("echo 'no route to host' >&2; exit 6", 5).await;
        match outcome {
            AttemptOutcome::CommandFailed { message } => {
                assert!(message.contains("exit status 6"));
                assert!(message.contains("no route to host"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_three_tokens_is_shape_failure() {
        let outcome = run_attempt("echo '0.25 200 extra'", 5).await;
        assert_eq!(
            outcome,
            AttemptOutcome::UnparsableShape {
                raw: "0.25 200 extra".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_double_space_is_shape_failure() {
        // split on single spaces: "0.25  200" yields three tokens
        let outcome = run_attempt("echo '0.25  200'", 5).await;
        assert!(matches!(outcome, AttemptOutcome::UnparsableShape { .. }));
    }

    #[tokio::test]
    async fn test_non_numeric_time_is_time_failure() {
        let outcome = run_attempt("echo 'fast 200'", 5).await;
        assert_eq!(
            outcome,
            AttemptOutcome::UnparsableTime {
                raw: "fast 200".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_slow_command_times_out() {
        let outcome = run_attempt("sleep 5; echo '0.1 200'", 1).await;
        assert_eq!(outcome, AttemptOutcome::TimedOut { limit_secs: 1 });
    }

    #[tokio::test]
    async fn test_empty_output_is_shape_failure() {
        let outcome = run_attempt("true", 5).await;
        assert!(matches!(outcome, AttemptOutcome::UnparsableShape { .. }));
    }
}
