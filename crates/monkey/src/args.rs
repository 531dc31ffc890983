//! the args for running monkey

use monkey_cli_common::LoggingArgs;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Scans and parses monkey source code")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Prints every token of the sources, one per line
    Tokens(SourceArgs),
    /// Prints the program tree of the sources, and any statements that were dropped
    Parse(SourceArgs),
}

#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// Source files to read. Reads standard input when none are given, or for `-`.
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    files: Vec<PathBuf>,
}

impl SourceArgs {
    /// Gets the sources to read, in order
    pub fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            return vec![Source::Stdin];
        }
        self.files
            .iter()
            .map(|file| {
                if file == Path::new("-") {
                    Source::Stdin
                } else {
                    Source::File(file.clone())
                }
            })
            .collect()
    }
}

/// Where source code is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
