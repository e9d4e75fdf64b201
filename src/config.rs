use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing;

/// Config file name, relative to the vault root.
pub const CONFIG_FILE: &str = "tag-hierarchy.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HierarchyConfig {
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl HierarchyConfig {
    /// Load `tag-hierarchy.toml` from the vault root.
    ///
    /// A missing file is normal and an unreadable or invalid one is not
    /// fatal: both fall back to defaults with a log line, so a typo in the
    /// config never takes the tag view down.
    pub fn load(vault_root: &Path) -> Self {
        let path = vault_root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::info!(
                "No config file found at {}. Using HierarchyConfig::default().",
                path.display()
            );
            return Self::default();
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    "Failed reading config file {}: {err}. Using defaults.",
                    path.display()
                );
                return Self::default();
            }
        };
        match toml::from_str::<HierarchyConfig>(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(
                    "Failed parsing config file {}: {err}. Using defaults.",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// More modified notes than this since the last refresh turns an
    /// incremental update into a full rebuild.
    #[serde(default = "RefreshConfig::default_rebuild_threshold")]
    pub rebuild_threshold: usize,
    #[serde(default = "RefreshConfig::default_update_on_startup")]
    pub update_on_startup: bool,
}

impl RefreshConfig {
    fn default_rebuild_threshold() -> usize {
        20
    }

    fn default_update_on_startup() -> bool {
        true
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            rebuild_threshold: Self::default_rebuild_threshold(),
            update_on_startup: Self::default_update_on_startup(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_enabled")]
    pub enabled: bool,
    /// Outline file path, relative to the vault root.
    #[serde(default = "ExportConfig::default_path")]
    pub path: PathBuf,
    #[serde(default = "ExportConfig::default_show_counts")]
    pub show_counts: bool,
    /// Tags seen fewer times than this are left out of the outline.
    #[serde(default = "ExportConfig::default_min_count")]
    pub min_count: u64,
}

impl ExportConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_path() -> PathBuf {
        PathBuf::from("Vault Tag Hierarchy.md")
    }

    fn default_show_counts() -> bool {
        true
    }

    fn default_min_count() -> u64 {
        1
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            path: Self::default_path(),
            show_counts: Self::default_show_counts(),
            min_count: Self::default_min_count(),
        }
    }
}
