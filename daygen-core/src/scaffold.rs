//! The `Scaffolder` creates a day directory with its stub and input files.
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::day::DayNumber;
use crate::day_paths::{day_dir, input_file, stub_file};

/// What `generate` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The directory was already there; nothing was written.
    AlreadyExists { day: DayNumber, dir: PathBuf },
    Created(CreatedDay),
}

/// Paths written for a new day, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDay {
    pub day: DayNumber,
    pub dir: PathBuf,
    pub stub: PathBuf,
    pub input: PathBuf,
}

#[derive(Debug)]
pub struct Scaffolder {
    pub config: Config,
}

impl Scaffolder {
    /// Creates a `Scaffolder` for the project at `root`, loading its configuration.
    pub fn new(root: PathBuf) -> Result<Self> {
        let config = Config::load(&root)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Scaffolds `day`.
    ///
    /// - If `{src}/day_NN` exists, returns [`ScaffoldOutcome::AlreadyExists`] without writing.
    /// - Otherwise creates the directory (and any missing parents), writes the stub, then
    ///   an empty `input.txt`.
    ///
    /// Filesystem errors are returned as-is with the path as context. A failure after the
    /// directory was created leaves it partially populated.
    pub fn generate(&self, day: DayNumber) -> Result<ScaffoldOutcome> {
        let dir = day_dir(&self.config.src_path(), day);
        if dir.exists() {
            return Ok(ScaffoldOutcome::AlreadyExists { day, dir });
        }

        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let language = self.config.language;
        let stub = stub_file(&dir, day, language);
        fs::write(&stub, language.stub_content(day))
            .with_context(|| format!("writing {}", stub.display()))?;

        let input = input_file(&dir);
        fs::write(&input, "").with_context(|| format!("writing {}", input.display()))?;

        Ok(ScaffoldOutcome::Created(CreatedDay {
            day,
            dir,
            stub,
            input,
        }))
    }
}
