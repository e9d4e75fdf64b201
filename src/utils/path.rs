// src/utils/path.rs
use anyhow::{Result, bail};
use std::path::{Component, Path, PathBuf};

/// Join a vault-relative path onto the vault root and return the absolute
/// path. Rejects absolute inputs and any `..` component, so a configured
/// export path can never escape the vault.
pub fn resolve_in_vault(root: &Path, rel: &Path) -> Result<PathBuf> {
    if rel.is_absolute() {
        bail!("absolute paths are not allowed: {}", rel.display());
    }
    if rel.as_os_str().is_empty() {
        bail!("empty path");
    }
    for component in rel.components() {
        if matches!(component, Component::ParentDir) {
            bail!("path escapes vault root: {}", rel.display());
        }
    }
    Ok(root.join(rel))
}
