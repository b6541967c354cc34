//! This client calls the note routes of a running server from the command
//! line.
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use config::{Config, File, FileFormat};
use notekeep::{
    notes::Note,
    request::{CreateNoteRequest, UpdateNoteRequest},
    response::{ErrorResponse, ListNotesResponse, MessageResponse},
};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The base URL used when neither a flag nor the config file sets one.
static DEFAULT_BASE_URL: Lazy<String> =
    Lazy::new(|| std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()));

/// Manage notes on a notekeep server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server to talk to, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
    },
    /// List every note slot
    List,
    /// Replace the description of a note
    Update { index: usize, description: String },
    /// Delete a note
    Delete { index: usize },
}

/// Finds the location for this app's local configuration.
fn get_config_base_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        Ok(PathBuf::from(path))
    } else if let Some(home) = dirs::home_dir() {
        Ok(home.join(".config"))
    } else {
        Err(anyhow!("failed to find config file path"))
    }
}

/// Reads `base_url` from the optional config file.
fn load_base_url(config_file_path: &Path) -> anyhow::Result<String> {
    let config = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL.as_str())?
        .add_source(
            File::from(config_file_path)
                .required(false)
                .format(FileFormat::Toml),
        )
        .build()
        .context("failed to load config file")?;

    config
        .get::<String>("base_url")
        .context("property 'base_url' is not a string")
}

/// Turns a non-success response into an error carrying the server's
/// message, if it sent one.
fn check(res: reqwest::blocking::Response) -> anyhow::Result<reqwest::blocking::Response> {
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    match res.json::<ErrorResponse>() {
        Ok(body) => Err(anyhow!("request failed with {status}: {}", body.error)),
        Err(_) => Err(anyhow!("request failed with {status}")),
    }
}

/// Renders one slot of the list response.
fn render_slot(index: usize, slot: &Option<Note>) -> String {
    let Some(note) = slot else {
        return format!("{index}: <deleted>");
    };

    let field = |name: &str| match note.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    format!("{index}: {} - {}", field("title"), field("description"))
}

fn run(cli: Cli, base_url: &str, client: &reqwest::blocking::Client) -> anyhow::Result<()> {
    match cli.command {
        Command::Create { title, description } => {
            let res = client
                .post(format!("{base_url}/notes"))
                .json(&CreateNoteRequest { title, description })
                .send()
                .context("request to create note failed")?;
            let body = check(res)?
                .json::<MessageResponse>()
                .context("failed to parse create response")?;

            println!("{}", body.message);
        }
        Command::List => {
            let res = client
                .get(format!("{base_url}/notes"))
                .send()
                .context("request to list notes failed")?;
            let body = check(res)?
                .json::<ListNotesResponse>()
                .context("failed to parse list response")?;

            debug!("{}", body.message);

            for (index, slot) in body.notes.iter().enumerate() {
                println!("{}", render_slot(index, slot));
            }
        }
        Command::Update { index, description } => {
            let res = client
                .patch(format!("{base_url}/notes/{index}"))
                .json(&UpdateNoteRequest {
                    description: Some(Value::String(description)),
                })
                .send()
                .context("request to update note failed")?;
            let body = check(res)?
                .json::<MessageResponse>()
                .context("failed to parse update response")?;

            println!("{}", body.message);
        }
        Command::Delete { index } => {
            let res = client
                .delete(format!("{base_url}/notes/{index}"))
                .send()
                .context("request to delete note failed")?;
            let body = check(res)?
                .json::<MessageResponse>()
                .context("failed to parse delete response")?;

            println!("{}", body.message);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // setup logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("client=debug")
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set global default")?;

    let cli = Cli::parse();

    let base_url = match &cli.base_url {
        Some(base_url) => base_url.clone(),
        None => {
            let config_file_path = get_config_base_path()?
                .join("notekeep")
                .join("config.toml");

            debug!("config file path: {:?}", config_file_path);

            load_base_url(&config_file_path)?
        }
    };
    let base_url = base_url.trim_end_matches('/').to_string();

    debug!("base url: {:?}", base_url);

    // use the same http client for all requests
    let client = reqwest::blocking::Client::new();

    run(cli, &base_url, &client)
}
