use crate::domain::model::{NameMatch, NameOrder};

pub trait NameMatcher: Send + Sync {
    fn order(&self) -> NameOrder;

    /// Literal expression text the matcher was compiled from.
    fn source(&self) -> &str;

    fn match_name(&self, input: &str) -> Option<NameMatch>;
}
