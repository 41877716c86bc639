//! Schema inspection: what the form layer would render for a field.
//!
//! `staykit field booking status --action update` prints the rendered
//! input as JSON; `staykit fields booking` lists every field with its
//! widget.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use staykit_form::{InputProps, ResourceInput};
use staykit_schema::{LocaleList, SchemaDocument, SchemaRegistry};
use tracing::debug;

use crate::config::ClientConfig;

/// Load the schema named by `--schema`, falling back to the current context's.
fn load_schema(schema: Option<&str>, client_config_path: &Path) -> Result<(SchemaRegistry, LocaleList)> {
    let path = match schema {
        Some(p) => PathBuf::from(p),
        None => {
            let config = ClientConfig::load(client_config_path)?;
            let ctx = config.require_current()?;
            if ctx.schema.is_empty() {
                anyhow::bail!(
                    "No schema set for context \"{}\". Run `staykit context set {} --schema <file>`.",
                    ctx.name,
                    ctx.name
                );
            }
            PathBuf::from(&ctx.schema)
        }
    };
    debug!(path = %path.display(), "using schema document");
    let doc = SchemaDocument::load(&path)
        .map_err(|e| anyhow::anyhow!("failed to load schema {}: {}", path.display(), e))?;
    Ok(doc.into_parts()?)
}

/// Render one field and print it as JSON.
pub fn show(
    resource: &str,
    field: &str,
    action: Option<&str>,
    value: Option<&str>,
    schema: Option<&str>,
    client_config_path: &Path,
) -> Result<()> {
    let (registry, languages) = load_schema(schema, client_config_path)?;

    let mut props = InputProps::new();
    if let Some(v) = value {
        props = props.value(
            serde_json::from_str::<serde_json::Value>(v).map_err(|e| anyhow::anyhow!("Invalid JSON value: {}", e))?,
        );
    }

    let rendered = ResourceInput::new(&registry, &languages)
        .render(resource, field, action, props)
        .ok_or_else(|| anyhow::anyhow!("Nothing to render for {}.{} (unknown field or unsupported type).", resource, field))?;

    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

/// List the fields of a resource with the widget each one renders as.
pub fn list(resource: &str, action: Option<&str>, schema: Option<&str>, client_config_path: &Path) -> Result<()> {
    let (registry, languages) = load_schema(schema, client_config_path)?;
    let schema = registry
        .resource(resource)
        .ok_or_else(|| anyhow::anyhow!("Unknown resource: {}", resource))?;

    let mut names: BTreeSet<&str> = schema.fields.keys().map(String::as_str).collect();
    if let Some(fields) = action.and_then(|a| schema.actions.get(a)) {
        names.extend(fields.keys().map(String::as_str));
    }

    let form = ResourceInput::new(&registry, &languages);
    println!("{:24} {:18} {}", "FIELD", "TYPE", "WIDGET");
    for name in names {
        let Some(def) = registry.find_field(resource, name, action) else {
            continue;
        };
        let widget = match form.render(resource, name, action, InputProps::new()) {
            Some(r) => serde_json::to_value(&r.widget)?["widget"]
                .as_str()
                .unwrap_or("-")
                .to_string(),
            None => "-".to_string(),
        };
        println!("{:24} {:18} {}", name, def.kind, widget);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn schema_from_current_context() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("schema.json");
        let mut f = std::fs::File::create(&schema_path).unwrap();
        write!(f, r#"{{"resources": {{"guest": {{"fields": {{"email": {{"type": "email", "label": "Email"}}}}}}}}}}"#)
            .unwrap();

        let config_path = dir.path().join("config.toml");
        assert!(load_schema(None, &config_path).is_err());

        let mut config = ClientConfig::default();
        config.entry("local").schema = schema_path.to_string_lossy().to_string();
        config.save(&config_path).unwrap();

        let (registry, _) = load_schema(None, &config_path).unwrap();
        assert!(registry.find_field("guest", "email", None).is_some());

        show("guest", "email", None, Some("\"a@b.c\""), None, &config_path).unwrap();
        assert!(show("guest", "phone", None, None, None, &config_path).is_err());
        assert!(show("guest", "email", None, Some("{oops"), None, &config_path).is_err());
        list("guest", None, None, &config_path).unwrap();
    }
}
