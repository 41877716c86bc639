//! Resource commands.
//!
//! `staykit list booking`, `staykit call booking check-in --json '{...}'`.
//! Every request goes through the SDK, so paths and bodies follow the
//! `POST /{resource}/{action}` convention.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use staykit_client::{ListParams, ResourceClient, Sdk, RESOURCES};
use tracing::debug;

use crate::config::ClientConfig;

fn client(resource: &str, client_config_path: &Path) -> Result<ResourceClient> {
    let config = ClientConfig::load(client_config_path)?;
    let ctx = config.require_current()?;
    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `staykit context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    debug!(context = %ctx.name, server = %ctx.server, resource, "resource client");
    Sdk::new(ctx.server.clone())
        .resource(resource)
        .ok_or_else(|| anyhow::anyhow!("Unknown resource type: {}. Run `staykit resources`.", resource))
}

fn parse_json(body: Option<&str>) -> Result<Value> {
    match body {
        Some(s) => serde_json::from_str(s).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e)),
        None => Ok(Value::Object(Default::default())),
    }
}

/// List records of a resource.
pub async fn list(
    resource: &str,
    page: Option<u32>,
    per_page: Option<u32>,
    search: Option<String>,
    output_json: bool,
    client_config_path: &Path,
) -> Result<()> {
    let client = client(resource, client_config_path)?;

    let mut params = ListParams::default();
    if let Some(p) = page {
        params = params.page(p);
    }
    if let Some(n) = per_page {
        params = params.per_page(n);
    }
    if let Some(q) = search {
        params = params.search(q);
    }

    let resp = client.list(&params).await?;
    if output_json {
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }

    for item in &resp.data {
        let id = item.get("id").and_then(Value::as_str).unwrap_or("-");
        println!("{:24} {}", id, item);
    }
    let p = &resp.pagination;
    println!("page {}/{} ({} total)", p.page, p.total_pages, p.total);
    Ok(())
}

/// Fetch one record.
pub async fn get(resource: &str, id: &str, client_config_path: &Path) -> Result<()> {
    let client = client(resource, client_config_path)?;
    let resp = client.get(id).await?;
    println!("{}", serde_json::to_string_pretty(&resp.data)?);
    Ok(())
}

/// Call any action with raw JSON params.
pub async fn call(
    resource: &str,
    action: &str,
    json_body: Option<&str>,
    upload: bool,
    client_config_path: &Path,
) -> Result<()> {
    let client = client(resource, client_config_path)?;
    let params = parse_json(json_body)?;

    let resp = if upload {
        client.upload(action, &params).await?
    } else {
        client.action(action, &params).await?
    };
    println!("{}", serde_json::to_string_pretty(&resp.data)?);
    Ok(())
}

/// Print every resource the SDK knows.
pub fn resources() {
    for r in RESOURCES {
        println!("{}", r);
    }
}
