//! Agent configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Agent configuration, loaded from `.blindbot/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum clauses in one refutation working set (`None`: unbounded).
    #[serde(default)]
    pub resolution_budget: Option<usize>,

    /// Pathfinding cost of stepping onto a cell not proven safe.
    #[serde(default = "default_unknown_cell_cost")]
    pub unknown_cell_cost: u32,

    /// Episode step limit.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Record the decision trace.
    #[serde(default = "default_true")]
    pub trace: bool,
}

fn default_unknown_cell_cost() -> u32 {
    3
}
fn default_max_steps() -> usize {
    500
}
fn default_true() -> bool {
    true
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            resolution_budget: None,
            unknown_cell_cost: default_unknown_cell_cost(),
            max_steps: default_max_steps(),
            trace: default_true(),
        }
    }
}

impl AgentConfig {
    /// Config file location relative to a project root.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(".blindbot/config.yaml")
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root, falling back to defaults when no file exists.
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = Self::project_path(project_root);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}
