pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{Overrides, Settings};
pub use core::registry::{first_last_pattern, last_first_pattern, NamePattern, PatternRegistry};
pub use core::report::{match_inputs, OutputFormat, ReportSummary};
pub use domain::model::{MatchReport, NameMatch, NameOrder};
pub use utils::error::{NameError, Result};
