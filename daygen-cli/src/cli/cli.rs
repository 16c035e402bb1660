use clap::Parser;
use daygen_core::Language;
use std::path::PathBuf;

use crate::render::ColorMode;

/// daygen — scaffold an Advent of Code day
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Day to scaffold (e.g. `daygen 3` creates `src/day_03/index.ts` and `src/day_03/input.txt`).
    #[arg(allow_negative_numbers = true)]
    pub day: Option<String>,
    /// Project root containing the `src` folder. Defaults to the current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Stub language: `ts` (index.ts), `py` (day_NN.py) or `rs` (mod.rs).
    /// Overrides `language` from daygen.toml.
    #[arg(long, short)]
    pub lang: Option<Language>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Only print errors.
    #[arg(long, short)]
    pub quiet: bool,
}
