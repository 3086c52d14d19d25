mod config;
mod employees;
mod http;
mod openapi;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::EmployeeStore;
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-server", version, about = "In-memory employee record service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Print the OpenAPI description of the HTTP surface.
    #[command(name = "openapi:print")]
    OpenapiPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(cmd) => {
            let app_config = Arc::new(AppConfig::load()?);
            run_server(cmd, app_config).await
        }
        Command::OpenapiPrint { output } => openapi_print(output),
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let store = if config.seed_employees {
        EmployeeStore::seeded()
    } else {
        EmployeeStore::new()
    };
    info!(employees = store.len(), "employee store initialized");
    let state = AppState::new(store, config);
    http::serve(cmd.into(), state).await
}

fn openapi_print(path: Option<PathBuf>) -> Result<()> {
    let document = serde_json::to_string_pretty(&openapi::document())?;
    match path {
        Some(target) => {
            std::fs::write(&target, document)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "openapi document written");
        }
        None => println!("{document}"),
    }
    Ok(())
}
