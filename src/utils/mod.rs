// src/utils/mod.rs

pub mod logbook; // best-effort JSONL event log under the vault root
pub mod path;    // vault-root containment for configured paths
