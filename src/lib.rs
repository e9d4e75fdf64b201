// src/lib.rs
//! Tag hierarchy core.
//!
//! - Parses flat tag paths (`project/work/urgent`) into a counted forest.
//! - Refreshes the forest from the vault: full rebuild or incremental merge
//!   over recently modified notes, threshold-gated.
//! - Optionally exports the forest as a markdown outline inside the vault.
//!
//! The host application (sidebar, commands, file watching) sits behind the
//! traits in [`services::vault`]; nothing in this crate touches a UI.

pub mod config;
pub mod model;
pub mod services;
pub mod utils;

// Public API
pub use config::{ExportConfig, HierarchyConfig, RefreshConfig};
pub use model::tree::{NodeId, TagNode, TagTree};
pub use services::aggregator::{RefreshOutcome, TagAggregator};
pub use services::vault::{NoteHandle, Notifier, TagCensus, TracingNotifier, VaultSource};
