use crate::config::Overrides;
use crate::core::report::OutputFormat;
use crate::domain::model::NameOrder;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "name-patterns")]
#[command(about = "Split personal names with the first-last / last-first patterns")]
pub struct CliConfig {
    /// Names to match; read one per line from stdin when omitted
    pub names: Vec<String>,

    #[arg(long, help = "Pattern to apply: first-last or last-first")]
    pub order: Option<NameOrder>,

    #[arg(long, help = "Output format: text or json")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Print both pattern literals and exit")]
    pub show_patterns: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            order: self.order,
            format: self.format,
            verbose: self.verbose,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "name-patterns",
            "--order",
            "last-first",
            "--format",
            "json",
            "Smith, John",
        ]);
        assert_eq!(cli.order, Some(NameOrder::LastFirst));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.names, vec!["Smith, John".to_string()]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_bad_order_is_rejected() {
        assert!(CliConfig::try_parse_from(["name-patterns", "--order", "sideways"]).is_err());
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let cli = CliConfig::parse_from(["name-patterns", "--config", ""]);
        assert!(cli.validate().is_err());
    }
}
