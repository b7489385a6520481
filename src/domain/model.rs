use crate::utils::error::NameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which component of a personal name comes first in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameOrder {
    /// "John Smith": surname anchored at the end.
    FirstLast,
    /// "Smith, John": surname anchored at the start.
    LastFirst,
}

impl NameOrder {
    pub const ALL: [NameOrder; 2] = [NameOrder::FirstLast, NameOrder::LastFirst];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameOrder::FirstLast => "first-last",
            NameOrder::LastFirst => "last-first",
        }
    }
}

impl fmt::Display for NameOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameOrder {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-last" | "fl" => Ok(NameOrder::FirstLast),
            "last-first" | "lf" => Ok(NameOrder::LastFirst),
            other => Err(NameError::InvalidConfigValueError {
                field: "order".to_string(),
                value: other.to_string(),
                reason: "Valid orders: first-last, last-first".to_string(),
            }),
        }
    }
}

/// The two capture groups of a successful match, mapped to name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    pub given: String,
    pub surname: String,
    pub order: NameOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub input: String,
    pub order: NameOrder,
    pub matched: Option<NameMatch>,
}

impl MatchReport {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_parsing() {
        assert_eq!("first-last".parse::<NameOrder>().unwrap(), NameOrder::FirstLast);
        assert_eq!("LF".parse::<NameOrder>().unwrap(), NameOrder::LastFirst);
        assert!("middle-first".parse::<NameOrder>().is_err());
    }

    #[test]
    fn test_order_serializes_kebab_case() {
        let json = serde_json::to_string(&NameOrder::LastFirst).unwrap();
        assert_eq!(json, "\"last-first\"");
        for order in NameOrder::ALL {
            assert_eq!(order.to_string().parse::<NameOrder>().unwrap(), order);
        }
    }
}
