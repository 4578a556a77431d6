//! Shorthand alias generator for kubectl
//!
//! Aliases are built by combining one part per stage (command, global option,
//! operation, resource, argument, positional argument). Parts carry allow-list
//! and block-list gates keyed by alias, and every combination passing those
//! gates becomes one line such as `alias kgpo='kubectl get pods'`.

use std::path::Path;

use log::debug;

use crate::config_file::{ConfigError, ConfigVocabulary};
use crate::parts::vocabulary::Vocabulary;

pub mod aliases;
pub mod combination;
pub mod config_file;
pub mod generator;
pub mod kubectl;
pub mod logger;
pub mod parts;
pub mod shell;

/// Load the vocabulary from a file, or the built-in kubectl vocabulary if none is given.
///
/// The vocabulary is linted but never rejected: gates referencing unknown
/// aliases only produce a warning.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_vocabulary(vocabulary_file: Option<&Path>) -> Result<Vocabulary, ConfigError> {
    let vocabulary = match vocabulary_file {
        Some(path) => {
            debug!("Loading vocabulary from {}", path.display());
            ConfigVocabulary::from_file(path)?.into()
        }
        None => {
            debug!("Using built-in kubectl vocabulary");
            kubectl::vocabulary()
        }
    };
    vocabulary.lint();
    Ok(vocabulary)
}
