use clap::Parser;
use name_patterns::config::toml_config::TomlConfig;
use name_patterns::config::LogFormat;
use name_patterns::utils::{logger, validation::Validate};
use name_patterns::{match_inputs, CliConfig, NameError, PatternRegistry, ReportSummary, Settings};
use std::io::{self, BufRead, Write};

fn main() {
    let config = CliConfig::parse();

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            // 日誌尚未初始化，直接輸出
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(settings.verbose, settings.log_level.as_deref()),
        LogFormat::Json => logger::init_json_logger(settings.verbose, settings.log_level.as_deref()),
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = run(&config, &settings) {
        tracing::error!("❌ name-patterns failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn load_settings(config: &CliConfig) -> Result<Settings, NameError> {
    config.validate()?;
    let file = config.config.as_deref().map(TomlConfig::from_file).transpose()?;
    Settings::resolve(&config.overrides(), file.as_ref())
}

fn run(config: &CliConfig, settings: &Settings) -> Result<(), NameError> {
    // 啟動時編譯樣式，失敗即終止
    let registry = PatternRegistry::try_global()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.show_patterns {
        for pattern in registry.iter() {
            writeln!(out, "{}\t{}", pattern.order(), pattern.as_str())?;
        }
        return Ok(());
    }

    let pattern = registry.get(settings.order);
    let reports = if config.names.is_empty() {
        let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
        match_inputs(pattern, lines)
    } else {
        match_inputs(pattern, &config.names)
    };

    for report in &reports {
        writeln!(out, "{}", settings.format.render(report)?)?;
    }

    let summary = ReportSummary::from_reports(&reports);
    tracing::info!(
        "Matched {}/{} inputs with {} pattern",
        summary.matched,
        summary.total,
        settings.order
    );

    Ok(())
}
