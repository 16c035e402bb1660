use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::day::DayRange;
use crate::template::Language;

pub const PROJECT_CONFIG_FILE: &str = "daygen.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Project root. Day directories are created under `{root}/{src_dir}`.
    pub root: PathBuf,
    /// Directory holding the day folders, relative to `root`. Default is `src`.
    pub src_dir: PathBuf,
    /// Which stub to write. Default is TypeScript (`index.ts`).
    pub language: Language,
    /// Last day of the calendar. Default is 25; Advent of Code 2025 only has 12.
    pub last_day: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    src_dir: Option<PathBuf>,
    language: Option<Language>,
    last_day: Option<u8>,
}

impl Config {
    /// Load config for the project at `root` from `{root}/daygen.toml`.
    /// A missing file means defaults; nothing outside the project is consulted.
    pub fn load(root: &Path) -> Result<Self> {
        let file_config = Self::read_file_config(root)?;
        Self::from_file_config(root, file_config)
    }

    /// Defaults only, no files consulted.
    pub fn with_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            src_dir: PathBuf::from("src"),
            language: Language::default(),
            last_day: DayRange::MAX_LAST,
        }
    }

    pub fn src_path(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    pub fn day_range(&self) -> DayRange {
        DayRange {
            first: 1,
            last: self.last_day,
        }
    }

    fn from_file_config(root: &Path, file_config: FileConfig) -> Result<Self> {
        let defaults = Self::with_root(root);
        let last_day = file_config.last_day.unwrap_or(defaults.last_day);
        if !(1..=DayRange::MAX_LAST).contains(&last_day) {
            bail!(
                "last_day must be between 1 and {}, got {last_day}",
                DayRange::MAX_LAST
            );
        }
        Ok(Self {
            root: defaults.root,
            src_dir: file_config.src_dir.unwrap_or(defaults.src_dir),
            language: file_config.language.unwrap_or(defaults.language),
            last_day,
        })
    }

    fn config_file_path(root: &Path) -> PathBuf {
        root.join(PROJECT_CONFIG_FILE)
    }

    fn read_file_config(root: &Path) -> Result<FileConfig> {
        let path = Self::config_file_path(root);
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let s = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
#[cfg(test)]
pub(crate) fn mk_config(root: PathBuf) -> Config {
    Config {
        root,
        src_dir: PathBuf::from("src"),
        language: Language::Ts,
        last_day: 25,
    }
}
