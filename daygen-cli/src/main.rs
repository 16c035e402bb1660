mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use daygen_core::{DayNumber, ScaffoldOutcome, Scaffolder};
use render::{RenderOptions, Renderer};
use std::ffi::OsString;
use std::process::ExitCode;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

fn main() -> ExitCode {
    ExitCode::from(run_with_args(std::env::args_os()))
}

/// Parses `args`, scaffolds, prints, and returns the process exit status.
fn run_with_args<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // clap exits with 2 on usage errors; every usage error here is a 1.
            e.print().ok();
            return if e.use_stderr() { FAILURE } else { SUCCESS };
        }
    };
    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.use_color(),
        use_color_stderr: cli.color.use_color_stderr(),
        quiet: cli.quiet,
    });

    match run(&cli) {
        Ok(outcome) => {
            renderer.print_outcome(&outcome);
            SUCCESS
        }
        Err(e) => {
            renderer.print_error(&format!("daygen: {e:#}"));
            FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ScaffoldOutcome> {
    // Missing and non-numeric input are reported before daygen.toml is read.
    let value = DayNumber::parse_value(cli.day.as_deref())?;
    let mut scaffolder = Scaffolder::new(cli.root.clone().unwrap_or_default())?;
    if let Some(lang) = cli.lang {
        scaffolder.config.language = lang;
    }
    let day = DayNumber::check(value, scaffolder.config.day_range())?;
    scaffolder.generate(day)
}
