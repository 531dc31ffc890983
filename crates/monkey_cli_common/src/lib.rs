#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};
use log::LevelFilter;

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet", global = true)]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose", global = true)]
    quiet: u8,
    /// Sets the logging level directly, overriding `-v` and `-q`
    #[clap(long = "log-level", env = "RUST_LOG", global = true)]
    level: Option<LevelFilter>,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used,
    /// or the level given explicitly.
    pub fn log_level_filter(&self) -> LevelFilter {
        if let Some(level) = self.level {
            return level;
        }
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            i8::MIN..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            2..=i8::MAX => LevelFilter::Trace,
        }
    }
}
