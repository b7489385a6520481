use crate::domain::model::MatchReport;
use crate::domain::ports::NameMatcher;
use crate::utils::error::{NameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];

    pub fn render(&self, report: &MatchReport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(match &report.matched {
                Some(m) => format!("given={}\tsurname={}", m.given, m.surname),
                None => format!("no match: {}", report.input),
            }),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(NameError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
}

impl ReportSummary {
    pub fn from_reports(reports: &[MatchReport]) -> Self {
        Self {
            total: reports.len(),
            matched: reports.iter().filter(|r| r.is_match()).count(),
        }
    }

    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }
}

/// Applies `matcher` to every input. Trailing line terminators are stripped first.
pub fn match_inputs<M, I, S>(matcher: &M, inputs: I) -> Vec<MatchReport>
where
    M: NameMatcher + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|raw| {
            let input = raw.as_ref().trim_end_matches(['\r', '\n']);
            let matched = matcher.match_name(input);
            if matched.is_none() {
                tracing::debug!("No {} match for {:?}", matcher.order(), input);
            }
            MatchReport {
                input: input.to_string(),
                order: matcher.order(),
                matched,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{first_last_pattern, last_first_pattern};
    use crate::domain::model::NameOrder;

    #[test]
    fn test_match_inputs_strips_line_endings() {
        let reports = match_inputs(first_last_pattern(), ["John Smith\r\n", "Ada Lovelace\n"]);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].input, "John Smith");
        assert_eq!(reports[0].matched.as_ref().unwrap().surname, "Smith");
        assert_eq!(reports[1].matched.as_ref().unwrap().given, "Ada");
    }

    #[test]
    fn test_summary_counts_misses() {
        let reports = match_inputs(last_first_pattern(), ["Smith, John", "", "['']"]);
        let summary = ReportSummary::from_reports(&reports);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unmatched(), 2);
    }

    #[test]
    fn test_render_text() {
        let reports = match_inputs(last_first_pattern(), ["Smith;John Michael", "Smith"]);
        assert_eq!(
            OutputFormat::Text.render(&reports[0]).unwrap(),
            "given=John Michael\tsurname=Smith"
        );
        assert_eq!(OutputFormat::Text.render(&reports[1]).unwrap(), "no match: Smith");
    }

    #[test]
    fn test_render_json() {
        let reports = match_inputs(first_last_pattern(), ["John Smith", ""]);

        let hit: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(&reports[0]).unwrap()).unwrap();
        assert_eq!(hit["order"], "first-last");
        assert_eq!(hit["matched"]["given"], "John");
        assert_eq!(hit["matched"]["surname"], "Smith");

        let miss: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(&reports[1]).unwrap()).unwrap();
        assert_eq!(miss["input"], "");
        assert!(miss["matched"].is_null());
        assert_eq!(reports[1].order, NameOrder::FirstLast);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
