pub mod config;
pub mod day;
pub mod day_paths;
pub mod scaffold;
pub mod template;

pub use config::Config;
pub use day::{DayError, DayNumber, DayRange};
pub use scaffold::{CreatedDay, ScaffoldOutcome, Scaffolder};
pub use template::Language;
