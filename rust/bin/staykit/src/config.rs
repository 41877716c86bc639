//! Client-side context management.
//!
//! Reads/writes `~/.staykit/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single context: one backend plus the schema document describing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "staging").
    pub name: String,

    /// API base URL (e.g. "https://api.example.com/v1").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Path to the schema document used by `staykit field`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema: String,
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ClientConfig {
    /// Default config file path: ~/.staykit/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the currently active context, if any.
    pub fn current(&self) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == self.current_context)
    }

    /// The active context, or an error telling the user how to pick one.
    pub fn require_current(&self) -> anyhow::Result<&Context> {
        self.current().ok_or_else(|| {
            anyhow::anyhow!("No current context. Run `staykit context set <name> --server <url>` first.")
        })
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Fetch a context for editing, creating an empty one if missing.
    /// The first context ever created becomes current.
    pub fn entry(&mut self, name: &str) -> &mut Context {
        if self.current_context.is_empty() {
            self.current_context = name.to_string();
        }
        let idx = match self.contexts.iter().position(|c| c.name == name) {
            Some(i) => i,
            None => {
                self.contexts.push(Context { name: name.to_string(), ..Default::default() });
                self.contexts.len() - 1
            }
        };
        &mut self.contexts[idx]
    }

    /// Remove a context by name. Returns true if it was found.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let len = self.contexts.len();
        self.contexts.retain(|c| c.name != name);
        if self.current_context == name {
            self.current_context = String::new();
        }
        self.contexts.len() < len
    }
}

/// Return the staykit config directory (~/.staykit).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".staykit")
}
