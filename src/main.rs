//! defect-client - command line front end for the session core
//!
//! # Configuration
//!
//! Sources, highest priority first:
//!
//! 1. CLI arguments
//! 2. Environment variables (`DEFECT_*`, also read from `.env`)
//! 3. YAML file given with `--config`
//! 4. Default values

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use defect_tracker_client::auth::RegisterRequest;
use defect_tracker_client::navigation::RouteDecision;
use defect_tracker_client::notifications::NotificationKind;
use defect_tracker_client::utils::logging::init_tracing;
use defect_tracker_client::{ClientConfig, ConfigBuilder, DefectClient, Role};
use std::path::PathBuf;
use std::process::ExitCode;

/// Construction defect tracker client
#[derive(Parser, Debug)]
#[command(name = "defect-client")]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL (overrides DEFECT_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "DEFECT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored credential
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "DEFECT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "observer")]
        role: Role,
    },
    /// Check whether the current session may open a path
    CanAccess { path: String },
    /// List the screens available to the current session
    Routes,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "warn" };
    init_tracing(filter, args.json_logs);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let client = DefectClient::new(config).context("failed to create client")?;
    client.start().await;

    let outcome = execute(&client, args.command).await;
    print_notifications(&client);
    outcome
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let base = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    let mut builder = ConfigBuilder::from_config(base.merge_env(|key| std::env::var(key).ok())?);
    if let Some(url) = &args.api_url {
        builder = builder.api_url(url.clone());
    }
    Ok(builder.try_build()?)
}

async fn execute(client: &DefectClient, command: Command) -> Result<ExitCode> {
    match command {
        Command::Login { username, password } => {
            let user = client.auth().login(&username, &password).await?;
            println!("Signed in as {} ({})", user.display_name(), user.role);
        }
        Command::Logout => client.auth().logout().await,
        Command::Whoami => match client.session().current_user() {
            Some(user) => {
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            None => {
                println!("Not signed in");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Register {
            username,
            password,
            full_name,
            email,
            role,
        } => {
            let request = RegisterRequest {
                username,
                password,
                full_name,
                email,
                role,
            };
            client.auth().register(&request).await?;
            println!("Registered {}", request.username);
        }
        Command::CanAccess { path } => {
            let decision = client.routes().resolve(&path);
            println!("{}: {}", path, describe(decision));
            if !matches!(decision, RouteDecision::Allow(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Routes => {
            for resource in client.routes().menu() {
                println!("{:<12} {}", format!("{:?}", resource), resource.path());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(decision: RouteDecision) -> String {
    match decision {
        RouteDecision::Allow(_) => "allowed".to_string(),
        RouteDecision::Pending => "pending".to_string(),
        RouteDecision::Redirect(target) => format!("redirect to {}", target.path()),
        RouteDecision::Denied(_) => "denied".to_string(),
        RouteDecision::NotFound => "not found".to_string(),
    }
}

fn print_notifications(client: &DefectClient) {
    for notification in client.notifications().list() {
        let tag = match notification.kind {
            NotificationKind::Info => "info",
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        eprintln!("[{}] {}", tag, notification.message);
    }
}
