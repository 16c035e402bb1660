use std::path::{Path, PathBuf};

use crate::day::DayNumber;
use crate::template::Language;

pub const DAY_DIR_PREFIX: &str = "day_";
pub const INPUT_FILE_NAME: &str = "input.txt";

/// `day_05`, `day_17`...
pub fn day_dir_name(day: DayNumber) -> String {
    format!("{DAY_DIR_PREFIX}{:02}", day.get())
}

pub fn day_dir(src_dir: &Path, day: DayNumber) -> PathBuf {
    src_dir.join(day_dir_name(day))
}

pub fn stub_file(day_dir: &Path, day: DayNumber, language: Language) -> PathBuf {
    day_dir.join(language.stub_file_name(day))
}

pub fn input_file(day_dir: &Path) -> PathBuf {
    day_dir.join(INPUT_FILE_NAME)
}
