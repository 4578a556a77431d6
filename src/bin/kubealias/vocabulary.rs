use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, ValueEnum};

use kubealias::config_file::{ConfigVocabulary, Format};
use kubealias::load_vocabulary;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct VocabularyArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Vocabulary file to print instead of the built-in kubectl vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

/// Print the active vocabulary.
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded, serialized or written.
pub fn run(args: &VocabularyArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let text = ConfigVocabulary::from(&vocabulary).to_text(args.format.into())?;
    std::io::stdout().lock().write_all(text.as_bytes())?;
    Ok(ExitCode::SUCCESS)
}
