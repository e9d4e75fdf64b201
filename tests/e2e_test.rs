//! Full pass over the public surface: load config from the vault root,
//! refresh the tree from a stub vault, export the outline, check the logbook.

use std::collections::HashMap;
use std::fs;

use anyhow::Result;
use chrono::{DateTime, Utc};

use tag_hierarchy_core::services::exporter;
use tag_hierarchy_core::{
    HierarchyConfig, NoteHandle, TagAggregator, TagCensus, TracingNotifier, VaultSource,
};

struct FixedVault {
    census: TagCensus,
}

impl VaultSource for FixedVault {
    fn tag_census(&self) -> Result<TagCensus> {
        Ok(self.census.clone())
    }

    fn notes_modified_since(&self, _since: DateTime<Utc>) -> Result<Vec<NoteHandle>> {
        Ok(Vec::new())
    }

    fn tags_in_note(&self, _note: &NoteHandle) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[test]
fn refresh_then_export_end_to_end() {
    let vault_root = tempfile::tempdir().expect("tempdir");
    fs::write(
        vault_root.path().join("tag-hierarchy.toml"),
        "[export]\npath = \"Tag Outline.md\"\n",
    )
    .expect("write config");

    let cfg = HierarchyConfig::load(vault_root.path());
    assert_eq!(cfg.export.path.to_str(), Some("Tag Outline.md"));

    let census: TagCensus = HashMap::from([
        ("project/work".to_string(), 4),
        ("project".to_string(), 1),
        ("idea".to_string(), 2),
    ]);
    let source = FixedVault { census };

    let mut agg = TagAggregator::new(source, TracingNotifier, &cfg.refresh)
        .with_logbook(vault_root.path());
    agg.refresh(false).expect("refresh");

    assert_eq!(agg.tree().get("project").expect("project").count, 5);

    let target =
        exporter::export_to(agg.tree(), vault_root.path(), &cfg.export).expect("export");
    let outline = fs::read_to_string(target).expect("read outline");
    assert_eq!(outline, "- idea (2)\n- project (5)\n  - work (4)\n");

    let log =
        fs::read_to_string(vault_root.path().join("tag-hierarchy.log.jsonl")).expect("read log");
    assert!(log.contains("tags_refreshed"));
    assert!(log.contains("outline_exported"));
}
