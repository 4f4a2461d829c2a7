use crate::constants::MESSAGES_FILE_ENV;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::get_messages_path;
use validation::validate_message_file;

/// One loading message with its display duration bounds.
///
/// The duration a message stays on screen is sampled as
/// `min_seconds + random_offset` with the offset uniform in
/// `[0, max_seconds)`, so `max_seconds` is the width of the random range,
/// not an absolute upper bound.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoadingMessage {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "MinSeconds")]
    pub min_seconds: u64,
    #[serde(rename = "MaxSeconds")]
    pub max_seconds: u64,
}

/// A named, ordered collection of loading messages selectable via `--set`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageSet {
    #[serde(rename = "SetName")]
    pub name: String,
    #[serde(rename = "Messages")]
    pub messages: Vec<LoadingMessage>,
}

/// The on-disk message document: a collection of named message sets.
///
/// The wire format uses PascalCase field names:
///
/// ```json
/// {
///   "Sets": [
///     {
///       "SetName": "default",
///       "Messages": [
///         { "Text": "Reticulating splines", "MinSeconds": 2, "MaxSeconds": 4 }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageFile {
    #[serde(rename = "Sets")]
    pub sets: Vec<MessageSet>,
}

impl MessageFile {
    /// Parses and validates a message document from raw JSON bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        let file: MessageFile = serde_json::from_slice(bytes)?;
        validate_message_file(&file)?;
        Ok(file)
    }

    /// Loads the message file from disk.
    ///
    /// The path is resolved in order of precedence: the `--messages` flag,
    /// the `LOADING_MESSAGES_FILE` environment variable, the platform config
    /// directory, and finally `messages.json` in the working directory.
    pub async fn load(path_override: Option<&str>) -> Result<Self, AppError> {
        let path = resolve_messages_path(path_override);
        let bytes = fs::read(&path).await.map_err(|e| {
            AppError::config_error(format!("cannot read message file {path}: {e}"))
        })?;
        Self::parse(&bytes)
    }

    /// Resolves the message set with the given name.
    ///
    /// Unknown names and empty sets are fatal configuration errors; both are
    /// reported here, before any animation starts.
    pub fn resolve_set(&self, name: &str) -> Result<&MessageSet, AppError> {
        let set = self
            .sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "no message set named \"{name}\" (available: {})",
                    self.set_names().join(", ")
                ))
            })?;

        if set.messages.is_empty() {
            return Err(AppError::config_error(format!(
                "message set \"{name}\" contains no messages"
            )));
        }

        Ok(set)
    }

    /// Names of all sets in the document, in file order.
    pub fn set_names(&self) -> Vec<&str> {
        self.sets.iter().map(|set| set.name.as_str()).collect()
    }

    /// Human-readable listing of the available sets, one per line.
    pub fn summary(&self) -> String {
        let mut out = String::from("Available message sets:\n");
        for set in &self.sets {
            let noun = if set.messages.len() == 1 {
                "message"
            } else {
                "messages"
            };
            out.push_str(&format!(
                "  {} ({} {})\n",
                set.name,
                set.messages.len(),
                noun
            ));
        }
        out
    }
}

/// Resolves the message file path from flag, environment, or defaults.
///
/// Without an explicit override the platform config directory is preferred
/// when a file exists there, otherwise the working directory is used so a
/// plain `messages.json` next to the binary keeps working.
pub fn resolve_messages_path(path_override: Option<&str>) -> String {
    if let Some(path) = path_override {
        return path.to_string();
    }

    if let Ok(path) = std::env::var(MESSAGES_FILE_ENV) {
        return path;
    }

    let platform_path = get_messages_path();
    if Path::new(&platform_path).exists() {
        return platform_path;
    }

    crate::constants::MESSAGES_FILE_NAME.to_string()
}
