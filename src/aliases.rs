//! Writing generated aliases

use std::io::{self, Write};

use log::{debug, info};
use thiserror::Error;

use crate::generator::generate;
use crate::parts::stage::Stage;
use crate::parts::vocabulary::Vocabulary;
use crate::shell::Shell;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write aliases: {0}")]
    Io(#[from] io::Error),
}

impl EmitError {
    /// The reader went away, eg. `kubealias aliases | head`
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            EmitError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Write one alias line per valid combination, preceded by a header comment
/// when `shell` names a recognized shell. Any other shell name is ignored.
///
/// Returns the number of aliases written.
///
/// # Errors
///
/// Returns `EmitError::Io` if writing to `out` fails.
pub fn write_aliases<W: Write>(
    out: &mut W,
    vocabulary: &Vocabulary,
    shell: Option<&str>,
) -> Result<usize, EmitError> {
    match shell.map(str::parse::<Shell>) {
        Some(Ok(shell)) => writeln!(out, "{}", shell.header())?,
        Some(Err(e)) => debug!("No header written: {e}"),
        None => {}
    }

    for stage in Stage::ALL {
        debug!("{stage}: {} parts", vocabulary.group(stage).len());
    }

    let mut count = 0;
    for combination in generate(vocabulary) {
        writeln!(out, "{combination}")?;
        count += 1;
    }
    out.flush()?;

    info!("Generated {count} aliases");
    Ok(count)
}
