mod config;
mod graphql;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use async_graphql::Request;
use clap::{Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::HrModule;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    graphql::{GraphqlData, SchemaType, build_schema},
    render::render_table,
};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "In-memory employee roster")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the starting roster, optionally filtered by name.
    List {
        #[arg(long, help = "Case-insensitive name substring")]
        filter: Option<String>,
        #[arg(long, help = "Emit JSON instead of a table")]
        json: bool,
    },
    /// Execute GraphQL documents in order against one roster.
    Run {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Print the GraphQL schema snapshot.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(ObsConfig {
        env_filter: config.log_filter.clone(),
        ..ObsConfig::default()
    })?;
    let hr = HrModule::new(config.seed.roster()?);
    info!(seed = ?config.seed, employees = hr.len(), "roster ready");
    let schema = build_schema(GraphqlData { hr: hr.clone() });
    match cli.command {
        Command::List { filter, json } => list(&hr, filter.as_deref().unwrap_or_default(), json),
        Command::Run { files } => run_documents(&schema, &files).await,
        Command::SchemaPrint { output } => schema_print(&schema, output),
    }
}

fn list(hr: &HrModule, filter: &str, json: bool) -> Result<()> {
    print!("{}", render_list(hr, filter, json)?);
    Ok(())
}

fn render_list(hr: &HrModule, filter: &str, json: bool) -> Result<String> {
    let records = hr.query(filter);
    if json {
        let mut out = serde_json::to_string_pretty(&records)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_table(&records))
    }
}

async fn run_documents(schema: &SchemaType, files: &[PathBuf]) -> Result<()> {
    let mut failed = 0usize;
    for path in files {
        let document = match std::fs::read_to_string(path) {
            Ok(document) => document,
            Err(err) => {
                failed += 1;
                warn!(file = %path.display(), error = %err, "failed to read document");
                continue;
            }
        };
        let response = schema.execute(Request::new(document)).await;
        if !response.errors.is_empty() {
            failed += 1;
            warn!(file = %path.display(), errors = response.errors.len(), "document returned errors");
        }
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    if failed > 0 {
        bail!("{failed} of {} documents returned errors", files.len());
    }
    Ok(())
}

fn schema_print(schema: &SchemaType, path: Option<PathBuf>) -> Result<()> {
    let sdl = schema.sdl();
    match path {
        Some(target) => {
            std::fs::write(&target, sdl)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "schema snapshot written");
        }
        None => print!("{sdl}"),
    }
    Ok(())
}
