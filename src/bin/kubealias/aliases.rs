use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use log::debug;

use kubealias::aliases::write_aliases;
use kubealias::load_vocabulary;

#[derive(Args, Debug)]
pub struct AliasesArgs {
    /// Shell the aliases are for; bash, zsh and fish get a header comment
    shell: Option<String>,

    /// Vocabulary file to use instead of the built-in kubectl vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

/// Generate aliases to stdout.
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded or stdout cannot be written.
pub fn run(args: &AliasesArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let mut out = BufWriter::new(std::io::stdout().lock());
    match write_aliases(&mut out, &vocabulary, args.shell.as_deref()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed early: {e}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}
