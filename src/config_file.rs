//! Vocabulary file handling for kubealias

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parts::group::Group;
use crate::parts::part::Part;
use crate::parts::vocabulary::Vocabulary;

/// Errors that can occur while loading or writing a vocabulary file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read vocabulary file: {path}")]
    VocabularyNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to parse YAML vocabulary file {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("Unable to parse JSON vocabulary file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("Unable to serialize vocabulary as YAML: {0}")]
    SerializeYaml(#[source] serde_yaml::Error),
    #[error("Unable to serialize vocabulary as JSON: {0}")]
    SerializeJson(#[source] serde_json::Error),
}

/// Supported vocabulary file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON, anything else is read as YAML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "json") {
            Format::Json
        } else {
            Format::Yaml
        }
    }
}

/// Configuration for a single part
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigPart {
    pub alias: String,
    pub full: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_when_one_of: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incompatible_with: Option<Vec<String>>,
}

impl From<ConfigPart> for Part {
    fn from(config: ConfigPart) -> Self {
        Part {
            alias: config.alias,
            full: config.full,
            allow_when_one_of: config.allow_when_one_of.unwrap_or_default(),
            incompatible_with: config.incompatible_with.unwrap_or_default(),
        }
    }
}

impl From<&Part> for ConfigPart {
    fn from(part: &Part) -> Self {
        let non_empty = |aliases: &Vec<String>| (!aliases.is_empty()).then(|| aliases.clone());
        ConfigPart {
            alias: part.alias.clone(),
            full: part.full.clone(),
            allow_when_one_of: non_empty(&part.allow_when_one_of),
            incompatible_with: non_empty(&part.incompatible_with),
        }
    }
}

/// Root structure of a vocabulary file, one optional list per stage
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigVocabulary {
    pub commands: Option<Vec<ConfigPart>>,
    pub global_options: Option<Vec<ConfigPart>>,
    pub operations: Option<Vec<ConfigPart>>,
    pub resources: Option<Vec<ConfigPart>>,
    pub arguments: Option<Vec<ConfigPart>>,
    pub positional_arguments: Option<Vec<ConfigPart>>,
}

fn into_group(parts: Option<Vec<ConfigPart>>) -> Group {
    parts
        .unwrap_or_default()
        .into_iter()
        .map(Part::from)
        .collect::<Vec<_>>()
        .into()
}

fn from_group(group: &Group) -> Option<Vec<ConfigPart>> {
    Some(group.iter().map(ConfigPart::from).collect())
}

impl From<ConfigVocabulary> for Vocabulary {
    fn from(config: ConfigVocabulary) -> Self {
        Vocabulary {
            commands: into_group(config.commands),
            global_options: into_group(config.global_options),
            operations: into_group(config.operations),
            resources: into_group(config.resources),
            arguments: into_group(config.arguments),
            positional_arguments: into_group(config.positional_arguments),
        }
    }
}

impl From<&Vocabulary> for ConfigVocabulary {
    fn from(vocabulary: &Vocabulary) -> Self {
        ConfigVocabulary {
            commands: from_group(&vocabulary.commands),
            global_options: from_group(&vocabulary.global_options),
            operations: from_group(&vocabulary.operations),
            resources: from_group(&vocabulary.resources),
            arguments: from_group(&vocabulary.arguments),
            positional_arguments: from_group(&vocabulary.positional_arguments),
        }
    }
}

impl ConfigVocabulary {
    /// Loads and parses a vocabulary file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::VocabularyNotFound` if the file cannot be read, or
    /// `ConfigError::Yaml`/`ConfigError::Json` if parsing fails.
    pub fn from_file(file: &Path) -> Result<ConfigVocabulary, ConfigError> {
        let contents =
            std::fs::read_to_string(file).map_err(|source| ConfigError::VocabularyNotFound {
                path: file.to_path_buf(),
                source,
            })?;
        debug!("Parsing vocabulary file {}", file.display());
        let config = match Format::from_path(file) {
            Format::Json => serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
                source: e,
                path: file.to_path_buf(),
            })?,
            Format::Yaml => serde_yaml::from_str(&contents).map_err(|e| ConfigError::Yaml {
                source: e,
                path: file.to_path_buf(),
            })?,
        };
        Ok(config)
    }

    /// Serializes the vocabulary in a format `from_file` accepts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SerializeYaml`/`ConfigError::SerializeJson` if serialization fails.
    pub fn to_text(&self, format: Format) -> Result<String, ConfigError> {
        match format {
            Format::Yaml => serde_yaml::to_string(self).map_err(ConfigError::SerializeYaml),
            Format::Json => serde_json::to_string_pretty(self)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(ConfigError::SerializeJson),
        }
    }
}
