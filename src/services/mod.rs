// src/services/mod.rs

pub mod vault;      // host boundary: census, modified notes, notifications
pub mod aggregator; // refresh policy: full rebuild vs incremental merge
pub mod exporter;   // markdown outline writer

// Public API
pub use aggregator::{RefreshOutcome, TagAggregator};
pub use vault::{NoteHandle, Notifier, TagCensus, TracingNotifier, VaultSource};
