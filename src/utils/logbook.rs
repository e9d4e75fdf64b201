// src/utils/logbook.rs
use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use std::{fs, io::Write, path::Path};

/// Event log file name, relative to the vault root.
pub const LOG_FILE: &str = "tag-hierarchy.log.jsonl";

/// Append one JSONL event line. Callers treat this as best effort and
/// ignore the result on hot paths.
pub fn emit_event(base: &Path, event: &str, data: Value) -> Result<()> {
    let log_path = base.join(LOG_FILE);
    let line = serde_json::json!({
        "timestamp": Utc::now().to_rfc3339(),
        "event": event,
        "data": data
    });
    let json = serde_json::to_string(&line)?;
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(f, "{}", json)?;
    Ok(())
}
