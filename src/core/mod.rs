pub mod registry;
pub mod report;

pub use crate::domain::model::{MatchReport, NameMatch, NameOrder};
pub use crate::domain::ports::NameMatcher;
pub use crate::utils::error::Result;
