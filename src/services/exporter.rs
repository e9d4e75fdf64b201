// src/services/exporter.rs
//! Markdown outline writer: one bullet level per tree depth, siblings sorted
//! by name, optional `(count)` suffix, written to a configured path inside
//! the vault root. Reads the tree, never mutates it.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::model::tree::{NodeId, TagTree};
use crate::utils::{logbook, path as vault_path};

/// Render the forest as a nested markdown list.
///
/// Nodes with `count < min_count` are omitted. Counts only grow toward the
/// root (every insert that touches a child touched its parent first), so
/// skipping a node skips its whole subtree.
pub fn render(tree: &TagTree, cfg: &ExportConfig) -> String {
    let mut out = String::new();
    for id in sorted_by_name(tree, tree.roots()) {
        render_node(tree, id, 0, cfg, &mut out);
    }
    out
}

/// Render and write the outline to the configured vault-relative path.
/// Creates missing parent directories. The tree is untouched on failure.
pub fn export_to(tree: &TagTree, vault_root: &Path, cfg: &ExportConfig) -> Result<PathBuf> {
    let target = vault_path::resolve_in_vault(vault_root, &cfg.path)
        .context("resolving export path")?;
    let body = render(tree, cfg);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating export directory {}", parent.display()))?;
    }
    fs::write(&target, body)
        .with_context(|| format!("writing tag outline {}", target.display()))?;

    let _ = logbook::emit_event(
        vault_root,
        "outline_exported",
        json!({ "path": target.to_string_lossy(), "nodes": tree.len() }),
    );
    Ok(target)
}

fn render_node(tree: &TagTree, id: NodeId, depth: usize, cfg: &ExportConfig, out: &mut String) {
    let node = tree.node(id);
    if node.count < cfg.min_count {
        return;
    }

    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str("- ");
    out.push_str(&node.name);
    if cfg.show_counts {
        out.push_str(&format!(" ({})", node.count));
    }
    out.push('\n');

    for child in sorted_by_name(tree, node.children()) {
        render_node(tree, child, depth + 1, cfg, out);
    }
}

fn sorted_by_name(tree: &TagTree, ids: &[NodeId]) -> Vec<NodeId> {
    let mut ids = ids.to_vec();
    ids.sort_by(|a, b| tree.node(*a).name.cmp(&tree.node(*b).name));
    ids
}
