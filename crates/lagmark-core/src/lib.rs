//! Lagmark Core - Fundamental types for the lagmark latency probe harness
//!
//! This crate provides:
//! - The probe specification and report records
//! - Duration formatting for report fields
//! - Serialization helpers
//! - Error types with miette diagnostics

use serde::Serialize;

pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use format::format_duration;
pub use types::{ProbeReport, ProbeSpec, DEFAULT_ATTEMPTS, DEFAULT_TIMEOUT_SECS};

/// Serialize a value to pretty JSON with 4-space indentation.
///
/// Markup-significant characters are left unescaped, so command strings
/// containing `<`, `>` or `&` round-trip verbatim.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| CoreError::report_encode(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| CoreError::report_encode(e.to_string()))
}
