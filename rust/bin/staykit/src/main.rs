//! `staykit`: command-line companion to the staykit SDK and form layer.
//!
//! Manages contexts (backend URL + schema document), calls resource
//! actions, and shows how the form layer renders schema fields.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "staykit", about = "staykit CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.staykit/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts.
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// List the resources the SDK knows.
    Resources,

    /// List records of a resource.
    List {
        resource: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long = "per-page")]
        per_page: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },

    /// Get one record.
    Get { resource: String, id: String },

    /// Call an action (e.g. `staykit call booking check-in --json '{"id": "bk_1"}'`).
    Call {
        resource: String,
        action: String,
        /// JSON params.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON params from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
        /// Send as a file-upload action.
        #[arg(long)]
        upload: bool,
    },

    /// Show the rendered input for one field.
    Field {
        resource: String,
        field: String,
        /// Render in the context of an action (e.g. update).
        #[arg(long)]
        action: Option<String>,
        /// Current value as JSON.
        #[arg(long)]
        value: Option<String>,
        /// Schema document (default: the current context's).
        #[arg(long)]
        schema: Option<String>,
    },

    /// List the fields of a resource and their widgets.
    Fields {
        resource: String,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        schema: Option<String>,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// List all contexts.
    List,
    /// Create a context or set its properties.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        schema: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set { name, server, schema } => {
                commands::context::set(&name, server.as_deref(), schema.as_deref(), &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Resources => commands::resource::resources(),

        Commands::List { resource, page, per_page, search } => {
            let json_output = cli.output == "json";
            commands::resource::list(&resource, page, per_page, search, json_output, &config_path).await?;
        }

        Commands::Get { resource, id } => {
            commands::resource::get(&resource, &id, &config_path).await?;
        }

        Commands::Call { resource, action, json_body, file, upload } => {
            let body = match file {
                Some(path) => Some(std::fs::read_to_string(&path)?),
                None => json_body,
            };
            commands::resource::call(&resource, &action, body.as_deref(), upload, &config_path).await?;
        }

        Commands::Field { resource, field, action, value, schema } => {
            commands::field::show(
                &resource,
                &field,
                action.as_deref(),
                value.as_deref(),
                schema.as_deref(),
                &config_path,
            )?;
        }

        Commands::Fields { resource, action, schema } => {
            commands::field::list(&resource, action.as_deref(), schema.as_deref(), &config_path)?;
        }

        Commands::Version => {
            println!("staykit cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
