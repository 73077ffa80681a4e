use anyhow::Context;
use pageforge_editor::FileStore;
use pageforge_render::{RenderRegistry, Renderer, Theme};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pageforge.config.json";

/// Pageforge configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory of stored page documents
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,

    /// Where rendered HTML goes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    #[serde(default)]
    pub theme: Theme,

    /// Extra type → template bindings for the renderer
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub type_overrides: BTreeMap<String, String>,

    /// Editor history cap, unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history_depth: Option<usize>,
}

fn default_documents_dir() -> String {
    "pages".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("invalid {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn documents_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.documents_dir)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(self.out_dir.as_deref().unwrap_or("dist"))
    }

    pub fn store(&self, cwd: &Path) -> FileStore {
        FileStore::new(self.documents_dir(cwd))
    }

    /// Renderer with the configured theme and type overrides registered
    pub fn renderer(&self) -> Renderer {
        let mut registry = RenderRegistry::new();
        for (type_key, template) in &self.type_overrides {
            registry.register(type_key, template.as_str());
        }
        Renderer::with_registry(self.theme.clone(), registry)
    }

    pub fn history_depth(&self) -> usize {
        self.max_history_depth.unwrap_or(0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            out_dir: None,
            theme: Theme::default(),
            type_overrides: BTreeMap::new(),
            max_history_depth: None,
        }
    }
}
