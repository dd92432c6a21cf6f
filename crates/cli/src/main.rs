//! # Chave Admin
//!
//! Command-line front end for the user-group administration module.

use chave_admin_domain::{CliOverrides, DomainError};
use clap::{Parser, Subcommand};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "chave-admin")]
#[command(version)]
#[command(about = "User-group administration for the Chave backend")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Database path override
    #[arg(long)]
    database: Option<String>,

    /// Log level override
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all user groups
    List,

    /// Show one user group with its permission ids
    Show { id: i64 },

    /// Create a user group
    Create {
        name: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Permission id to link (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<i64>,
    },

    /// Update a user group; the permission list replaces the current set
    Update {
        id: i64,

        name: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Permission id the group should end up with (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<i64>,
    },

    /// Delete a user group
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let pool = bootstrap::init_database(&config.database).await?;
    let repositories = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repositories);

    if let Err(e) = run(cli.command, &use_cases).await {
        if let Some(domain_err) = e.downcast_ref::<DomainError>() {
            // Stable key so front ends can localize the failure.
            eprintln!(
                "{}",
                serde_json::json!({
                    "error": domain_err.to_string(),
                    "messageKey": domain_err.message_key(),
                })
            );
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}

async fn run(command: Command, use_cases: &di::UseCases) -> anyhow::Result<()> {
    match command {
        Command::List => {
            let groups = use_cases.get_user_groups.get_all().await?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        Command::Show { id } => {
            let detail = use_cases.get_user_groups.get_by_id(id).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::Create {
            name,
            description,
            permissions,
        } => {
            let group = use_cases
                .create_user_group
                .execute(name, description, permissions)
                .await?;
            println!("{}", serde_json::to_string_pretty(&group)?);
        }
        Command::Update {
            id,
            name,
            description,
            permissions,
        } => {
            let group = use_cases
                .update_user_group
                .execute(id, name, description, permissions)
                .await?;
            println!("{}", serde_json::to_string_pretty(&group)?);
        }
        Command::Delete { id } => {
            use_cases.delete_user_group.execute(id).await?;
            println!("{{\"deleted\": {id}}}");
        }
    }

    Ok(())
}
