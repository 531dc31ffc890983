use crate::args::{Args, Command};
use crate::commands::{print_program, print_tokens};
use chrono::Utc;
use clap::Parser;
use log::{debug, trace, Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use std::io::{stderr, stdout};
use std::process::ExitCode;

mod args;
mod commands;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting monkey with args {args:?}");
    debug!("monkey version: {}", env!("CARGO_PKG_VERSION"));

    let mut failures = 0;
    match &args.command {
        Command::Tokens(source_args) => {
            let mut out = stdout().lock();
            for source in source_args.sources() {
                failures += print_tokens(&source.to_string(), source.open()?, &mut out)?;
            }
        }
        Command::Parse(source_args) => {
            let mut out = stdout().lock();
            let mut diagnostics = stderr().lock();
            for source in source_args.sources() {
                failures += print_program(
                    &source.to_string(),
                    source.open()?,
                    &mut out,
                    &mut diagnostics,
                )?;
            }
        }
    }

    if failures > 0 {
        debug!("finished with {failures} failures");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let pid = sysinfo::get_current_pid()
        .map(|pid| pid.to_string())
        .unwrap_or_else(|_| "?".to_string());
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {:>5} {} --- [{:>16}] {:<32} : {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level().if_supports_color(Stderr, |text| match text {
                    Level::Error => text.bright_red().to_string(),
                    Level::Warn => text.bright_yellow().to_string(),
                    Level::Info => text.green().to_string(),
                    Level::Debug => text.blue().to_string(),
                    Level::Trace => text.purple().to_string(),
                }),
                pid,
                std::thread::current()
                    .name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("{:?}", std::thread::current().id())),
                record.target(),
                message
            ))
        })
        .level(level_filter)
        .chain(stderr())
        .apply()?;
    Ok(())
}
