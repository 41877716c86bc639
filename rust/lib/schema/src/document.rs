//! Schema document loading.
//!
//! The backend (or a checked-in fixture) provides one JSON document:
//!
//! ```json
//! {
//!   "languages": [{"locale": "en", "international_name": "English", "iso_locale": "en_GB"}],
//!   "resources": {
//!     "booking": {
//!       "fields": {"notes": {"type": "text", "label": "Notes"}},
//!       "actions": {"update": {"status": {"type": "picklist", "possibleValues": {...}}}}
//!     }
//!   },
//!   "overrides": [{"apply_to": ["booking.notes"], "options": {"format": "multiline"}}]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SchemaError;
use crate::locale::LocaleList;
use crate::overrides::{apply_overrides, FieldOverride};
use crate::registry::{ResourceSchema, SchemaRegistry};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub languages: LocaleList,

    #[serde(default)]
    pub resources: BTreeMap<String, ResourceSchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<FieldOverride>,
}

impl SchemaDocument {
    pub fn from_json_str(s: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a schema document from disk.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        debug!("loading schema from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Build the registry (with overrides applied) and the locale list.
    pub fn into_parts(self) -> Result<(SchemaRegistry, LocaleList), SchemaError> {
        let mut registry = SchemaRegistry::from_resources(self.resources);
        let touched = apply_overrides(&mut registry, &self.overrides)?;
        info!(
            resources = registry.len(),
            fields = registry.field_count(),
            languages = self.languages.len(),
            overridden = touched,
            "schema loaded"
        );
        Ok((registry, self.languages))
    }
}
