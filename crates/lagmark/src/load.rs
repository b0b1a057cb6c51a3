use lagmark_core::{CoreError, ProbeSpec, Result};

/// Load the probe list from a JSON file.
///
/// The file holds a JSON array of probe objects. An unreadable file and
/// malformed JSON are the two load-time fatal conditions; nothing is run
/// if either occurs.
pub fn load_probes(path: &str) -> Result<Vec<ProbeSpec>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::probe_file_read(path, e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| CoreError::probe_file_parse(path, e.to_string()))
}
