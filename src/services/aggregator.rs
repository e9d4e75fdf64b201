// src/services/aggregator.rs
//! Refresh policy: decides between a full rebuild and an incremental merge,
//! then drives the tree's mutation API. Owns the tree and the last-refresh
//! timestamp; everything else comes from the vault source.
//!
//! - Full rebuild (clear + re-insert the whole census) is the only path that
//!   purges nodes for since-deleted tags.
//! - The incremental path is additive-only: it re-counts tag references in
//!   recently modified notes and merges the delta in. It never decrements a
//!   count and never removes a node, so repeated incremental cycles drift
//!   upward from ground truth until the next full rebuild. Accepted
//!   limitation, kept on purpose; see DESIGN.md before "fixing" it.
//! - Writers serialize through `&mut self`; readers only ever get `&TagTree`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::RefreshConfig;
use crate::model::tree::TagTree;
use crate::services::vault::{NoteHandle, Notifier, TagCensus, VaultSource};
use crate::utils::logbook;

/// Which path a refresh took, with rough volume for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Tree was cleared and rebuilt from the full census.
    FullRebuild { tags: usize },
    /// Delta from modified notes was merged in. `skipped` counts notes whose
    /// tags could not be read; their siblings still went through.
    Incremental { notes: usize, skipped: usize, tags: usize },
}

/// Owns the [`TagTree`] and a timestamp of the last successful refresh.
/// Everything else (census, note list, per-note tags) comes from the source.
pub struct TagAggregator<S, N> {
    source: S,
    notifier: N,
    tree: TagTree,
    last_refresh: Option<DateTime<Utc>>,
    rebuild_threshold: usize,
    logbook: Option<PathBuf>,
}

impl<S: VaultSource, N: Notifier> TagAggregator<S, N> {
    pub fn new(source: S, notifier: N, cfg: &RefreshConfig) -> Self {
        Self {
            source,
            notifier,
            tree: TagTree::new(),
            last_refresh: None,
            rebuild_threshold: cfg.rebuild_threshold,
            logbook: None,
        }
    }

    /// Also append refresh events to the JSONL logbook under `base`.
    pub fn with_logbook(mut self, base: impl Into<PathBuf>) -> Self {
        self.logbook = Some(base.into());
        self
    }

    /// Read view for renderers and the exporter.
    pub fn tree(&self) -> &TagTree {
        &self.tree
    }

    /// `None` until the first successful refresh.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Bring the tree up to date with the vault.
    ///
    /// A full rebuild runs when `force_full` is set, on the first refresh
    /// ever, or when more than `rebuild_threshold` notes changed since the
    /// last one (past that point the per-note scan costs more than starting
    /// over, and a rebuild also heals incremental drift). Otherwise the
    /// modified notes' tags are merged in additively.
    ///
    /// On failure the tree keeps its pre-refresh state, the notifier gets
    /// one message, and the error is returned to the caller.
    pub fn refresh(&mut self, force_full: bool) -> Result<RefreshOutcome> {
        match self.try_refresh(force_full) {
            Ok(outcome) => {
                self.log_outcome(&outcome);
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "tag refresh failed");
                self.notifier
                    .notify(&format!("Tag hierarchy: refresh failed: {err:#}"));
                Err(err)
            }
        }
    }

    fn try_refresh(&mut self, force_full: bool) -> Result<RefreshOutcome> {
        let now = Utc::now();

        // Census and note list are fetched before any mutation, so a failure
        // here leaves the tree exactly as it was.
        let census = self.source.tag_census().context("querying tag census")?;

        let last = match self.last_refresh {
            Some(ts) if !force_full => ts,
            _ => {
                let outcome = self.rebuild(&census);
                self.last_refresh = Some(now);
                return Ok(outcome);
            }
        };

        let modified = self
            .source
            .notes_modified_since(last)
            .context("listing modified notes")?;

        let outcome = if modified.len() > self.rebuild_threshold {
            self.rebuild(&census)
        } else {
            self.merge_notes(&modified)
        };
        self.last_refresh = Some(now);
        Ok(outcome)
    }

    fn rebuild(&mut self, census: &TagCensus) -> RefreshOutcome {
        self.tree.clear();
        for (path, count) in census {
            self.tree.insert(path, *count);
        }
        RefreshOutcome::FullRebuild { tags: census.len() }
    }

    /// Additive merge of the modified notes' tag references. One unreadable
    /// note is skipped with a warning; the rest of the batch still lands.
    fn merge_notes(&mut self, notes: &[NoteHandle]) -> RefreshOutcome {
        let mut delta: HashMap<String, u64> = HashMap::new();
        let mut skipped = 0usize;
        for note in notes {
            match self.source.tags_in_note(note) {
                Ok(tags) => {
                    for tag in tags {
                        *delta.entry(tag).or_default() += 1;
                    }
                }
                Err(err) => {
                    skipped += 1;
                    tracing::warn!(note = note.as_str(), error = %err, "skipping unreadable note");
                }
            }
        }

        let tags = delta.len();
        for (path, count) in &delta {
            self.tree.insert(path, *count);
        }
        RefreshOutcome::Incremental {
            notes: notes.len(),
            skipped,
            tags,
        }
    }

    fn log_outcome(&self, outcome: &RefreshOutcome) {
        let Some(base) = &self.logbook else { return };
        let data = match *outcome {
            RefreshOutcome::FullRebuild { tags } => json!({
                "mode": "full", "tags": tags, "nodes": self.tree.len(),
            }),
            RefreshOutcome::Incremental { notes, skipped, tags } => json!({
                "mode": "incremental", "notes": notes, "skipped": skipped, "tags": tags,
            }),
        };
        // Best effort; the logbook never fails a refresh.
        let _ = logbook::emit_event(base, "tags_refreshed", data);
    }
}
