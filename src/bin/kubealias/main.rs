mod aliases;
mod vocabulary;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kubealias", about = "Shorthand shell aliases for kubectl")]
struct Cli {
    /// Log file path (diagnostics are also written to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates aliases for kubectl
    #[command(
        long_about = "Generates shorthand aliases for kubectl, e.g. 'kubectl get pods' becomes 'kgpo'. \
                      Heavily inspired by https://github.com/ahmetb/kubectl-aliases"
    )]
    Aliases(aliases::AliasesArgs),
    /// Print the vocabulary aliases are built from, in the format `--vocabulary` reads
    Vocabulary(vocabulary::VocabularyArgs),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = cli.log_file.as_ref().map(std::fs::File::create).transpose()?;
    kubealias::logger::init(log_file)?;

    match cli.command {
        Commands::Aliases(ref args) => aliases::run(args),
        Commands::Vocabulary(ref args) => vocabulary::run(args),
    }
}
