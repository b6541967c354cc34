//! Server configuration, layered from defaults, an optional TOML file and
//! `NOTEKEEP_` environment variables.
use std::net::{AddrParseError, SocketAddr};

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
};
use serde::Deserialize;
use serde_json::Value;

use crate::notes::{Note, NoteError};

/// The config file looked up when `NOTEKEEP_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "notekeep.toml";

/// How strictly incoming notes are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSchema {
    /// Any JSON object is stored verbatim.
    #[default]
    Loose,
    /// Notes need string `title` and `description` fields.
    Strict,
}

impl NoteSchema {
    /// Checks a note about to be created.
    pub fn check_note(&self, note: &Note) -> Result<(), NoteError> {
        if *self == NoteSchema::Loose {
            return Ok(());
        }

        for field in ["title", "description"] {
            match note.get(field) {
                Some(Value::String(_)) => {}
                Some(_) => return Err(NoteError::InvalidNote(format!("{field} must be a string"))),
                None => return Err(NoteError::InvalidNote(format!("{field} is required"))),
            }
        }

        Ok(())
    }

    /// Checks a description about to replace an existing one.
    pub fn check_description(&self, description: Option<&Value>) -> Result<(), NoteError> {
        match (self, description) {
            (NoteSchema::Loose, _) | (NoteSchema::Strict, Some(Value::String(_))) => Ok(()),
            (NoteSchema::Strict, _) => Err(NoteError::InvalidNote(
                "description must be a string".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// An `EnvFilter` directive string.
    pub log_filter: String,
    /// Log to a daily rolling file in this directory instead of stdout.
    pub log_dir: Option<String>,
    pub schema: NoteSchema,
}

impl ServerConfig {
    /// Loads the config from `path` (optional) and the environment.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("NOTEKEEP"))
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 3000)?
        .set_default("log_filter", "server=debug,notekeep=debug")?
        .set_default("schema", "loose")
}
