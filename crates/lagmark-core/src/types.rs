use serde::{Deserialize, Serialize};

/// Default number of attempts when a probe doesn't specify one
pub const DEFAULT_ATTEMPTS: u32 = 3;
/// Default per-attempt timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One named probe as loaded from the input file.
///
/// `count` and `timeout` may be omitted (or zero) in the input; zero means
/// "use the default" and is resolved when the probe runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSpec {
    /// Display name for the probe
    pub name: String,
    /// Opaque shell invocation, passed to the interpreter verbatim
    pub command: String,
    /// Number of attempts (0 = default)
    #[serde(default)]
    pub count: u32,
    /// Per-attempt timeout in seconds (0 = default)
    #[serde(default)]
    pub timeout: u64,
}

impl ProbeSpec {
    /// Attempt count with the default applied
    pub fn resolved_count(&self) -> u32 {
        if self.count == 0 {
            DEFAULT_ATTEMPTS
        } else {
            self.count
        }
    }

    /// Timeout in seconds with the default applied
    pub fn resolved_timeout(&self) -> u64 {
        if self.timeout == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout
        }
    }
}

/// Aggregated outcome of all attempts for one probe.
///
/// `status_codes` and `response_times` are index-aligned with attempt
/// order: entry `i` describes attempt `i`. Attempts that produced no
/// parseable status leave an empty string at their index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub name: String,
    #[serde(rename = "statusCodes")]
    pub status_codes: Vec<String>,
    #[serde(rename = "responseTimes")]
    pub response_times: Vec<String>,
    /// Mean elapsed time over successful attempts, formatted ("0 ms" when
    /// no attempt succeeded)
    pub average: String,
    /// Attempts that did not produce a parsed timing
    pub failures: u32,
}
