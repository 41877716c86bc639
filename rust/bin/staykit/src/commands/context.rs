//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

/// List all contexts.
pub fn list(client_config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(client_config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("Run: staykit context set <name> --server <url>");
        return Ok(());
    }

    println!("{:2} {:20} {:40} {}", "", "NAME", "SERVER", "SCHEMA");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { " " };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        let schema = if ctx.schema.is_empty() { "-" } else { &ctx.schema };
        println!("{:2} {:20} {:40} {}", marker, ctx.name, server, schema);
    }

    Ok(())
}

/// Create a context or update its properties.
pub fn set(name: &str, server: Option<&str>, schema: Option<&str>, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;
    let existed = config.contexts.iter().any(|c| c.name == name);

    let ctx = config.entry(name);
    if let Some(s) = server {
        ctx.server = s.trim_end_matches('/').to_string();
    }
    if let Some(s) = schema {
        ctx.schema = s.to_string();
    }

    config.save(client_config_path)?;
    if existed {
        println!("Context \"{}\" updated.", name);
    } else {
        println!("Context \"{}\" created.", name);
    }
    Ok(())
}

/// Switch current context.
pub fn use_context(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.contexts.iter().any(|c| c.name == name) {
        anyhow::bail!("Context \"{}\" not found. Run `staykit context list` to see available contexts.", name);
    }

    config.current_context = name.to_string();
    config.save(client_config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}
