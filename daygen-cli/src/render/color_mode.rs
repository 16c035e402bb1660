use clap::ValueEnum;
use std::io::{self, IsTerminal};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Colors for stdout.
    pub fn use_color(self) -> bool {
        self.resolve(io::stdout().is_terminal())
    }

    /// Colors for stderr, which may be redirected independently of stdout.
    pub fn use_color_stderr(self) -> bool {
        self.resolve(io::stderr().is_terminal())
    }

    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}
