// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for lagmark operations.
///
/// Only the run-level boundaries can fail: loading the probe list and
/// encoding the final report. Per-attempt failures are absorbed into the
/// report and never surface here.
#[derive(Error, Debug, Diagnostic)]
pub enum CoreError {
    /// Probe file could not be read
    #[error("Failed to read probe file '{path}': {message}")]
    #[diagnostic(
        code(lagmark::probe_file_read),
        help("Verify the path exists and is readable")
    )]
    ProbeFileRead {
        #[allow(unused)]
        path: String,
        #[allow(unused)]
        message: String,
    },

    /// Probe file could not be parsed
    #[error("Failed to parse probe file '{path}': {message}")]
    #[diagnostic(
        code(lagmark::probe_file_parse),
        help("The file must be a JSON array of objects with `name` and `command` fields, and optional `count` and `timeout`")
    )]
    ProbeFileParse {
        #[allow(unused)]
        path: String,
        #[allow(unused)]
        message: String,
    },

    /// Report serialization failed
    #[error("Failed to encode results: {message}")]
    #[diagnostic(
        code(lagmark::report_encode),
        help("This is likely a bug in lagmark. Please report it with the full error details")
    )]
    ReportEncode {
        #[allow(unused)]
        message: String,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn probe_file_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeFileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn probe_file_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeFileParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn report_encode(message: impl Into<String>) -> Self {
        Self::ReportEncode {
            message: message.into(),
        }
    }
}
