// src/services/vault.rs
//! Host boundary. The core never talks to the host application directly;
//! everything it needs from the vault arrives through these traits, and the
//! one thing it sends back (user-visible errors) leaves through [`Notifier`].

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Complete mapping of tag path to total occurrence count across the vault
/// at a point in time.
pub type TagCensus = HashMap<String, u64>;

/// Opaque handle to one note in the vault (vault-relative path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteHandle(String);

impl NoteHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What the aggregation service reads from the vault.
pub trait VaultSource {
    /// Full census, queried fresh for every refresh.
    fn tag_census(&self) -> Result<TagCensus>;

    /// Notes whose modification time is strictly later than `since`.
    fn notes_modified_since(&self, since: DateTime<Utc>) -> Result<Vec<NoteHandle>>;

    /// Raw tag references found in one note. Every occurrence is listed;
    /// duplicates are meaningful and each counts as one occurrence.
    fn tags_in_note(&self, note: &NoteHandle) -> Result<Vec<String>>;
}

impl<S: VaultSource + ?Sized> VaultSource for &S {
    fn tag_census(&self) -> Result<TagCensus> {
        (**self).tag_census()
    }

    fn notes_modified_since(&self, since: DateTime<Utc>) -> Result<Vec<NoteHandle>> {
        (**self).notes_modified_since(since)
    }

    fn tags_in_note(&self, note: &NoteHandle) -> Result<Vec<String>> {
        (**self).tags_in_note(note)
    }
}

/// User-facing notification channel. The host surfaces these in its UI;
/// refresh failures produce exactly one notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Default notifier for headless use: forwards to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
