//! One-shot CLI commands.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

use autodiag_common::config::AutodiagConfig;
use autodiag_common::diagnosis::{DiagnosisClient, DiagnosisError, HttpDiagnosisClient};
use autodiag_common::i18n::{translations, Translation, SUPPORTED_LANGUAGES};
use autodiag_common::types::{DiagnosisRecord, LanguageCode, VehicleQuery};

use crate::output;

/// Resolve the UI language: explicit --lang beats the config default.
/// Unsupported codes are an error, not a silent fallback.
pub fn resolve_language(arg: Option<&str>, config: &AutodiagConfig) -> Result<LanguageCode> {
    match arg {
        Some(code) => LanguageCode::from_code(code).ok_or_else(|| {
            anyhow!(
                "Unsupported language '{}'. Supported: {}",
                code,
                SUPPORTED_LANGUAGES
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }),
        None => Ok(config.language()),
    }
}

/// `autodiagctl diagnose` - run one diagnosis and print the cards.
pub async fn diagnose(
    make: String,
    model: Option<String>,
    year: String,
    symptoms: String,
    lang: Option<String>,
) -> Result<()> {
    let config = AutodiagConfig::load()?;
    let lang = resolve_language(lang.as_deref(), &config)?;
    let t = translations(lang);

    let query = VehicleQuery {
        make,
        model: model.unwrap_or_default(),
        year,
        symptoms,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(t.analyzing.to_string());

    let llm = config.llm.clone();
    let dispatch = query.clone();
    let result = tokio::task::spawn_blocking(move || -> Result<_, DiagnosisError> {
        let client =
            HttpDiagnosisClient::new(llm).map_err(|e| DiagnosisError::Http(e.to_string()))?;
        client.diagnose(&dispatch, lang)
    })
    .await?;

    spinner.finish_and_clear();

    match result {
        Ok(records) => {
            print_results(&records, t);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, vehicle = %query.summary(), "diagnosis failed");
            // One generic localized message, whatever the cause
            eprintln!("{}", t.error.red().bold());
            std::process::exit(1);
        }
    }
}

fn print_results(records: &[DiagnosisRecord], t: &Translation) {
    println!("{}", t.results_title.bold().underline());
    println!();

    if records.is_empty() {
        println!("{}", t.no_results);
    } else {
        for record in records {
            let lines = output::result_card_lines(record, t);
            for (i, line) in lines.iter().enumerate() {
                match i {
                    0 => println!("{}", line.bold()),
                    1 => println!(
                        "{}",
                        line.color(output::severity_color(record.severity))
                    ),
                    _ => println!("{}", line),
                }
            }
            println!();
        }
    }

    println!("{}", format!("{}: {}", t.warning, t.safety_tip).dimmed());
    println!("{}", t.visit_mechanic.dimmed());
}

/// `autodiagctl languages` - list the supported language codes.
pub fn languages() {
    for lang in SUPPORTED_LANGUAGES {
        let marker = if lang.is_rtl() { " (RTL)" } else { "" };
        println!("{}  {}{}", lang.code().bold(), lang.native_name(), marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_prefers_flag() {
        let config = AutodiagConfig {
            default_language: "de".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_language(Some("ar"), &config).unwrap(),
            LanguageCode::Ar
        );
        assert_eq!(resolve_language(None, &config).unwrap(), LanguageCode::De);
    }

    #[test]
    fn test_resolve_language_rejects_unknown_code() {
        let config = AutodiagConfig::default();
        let err = resolve_language(Some("xx"), &config).unwrap_err();
        assert!(err.to_string().contains("xx"));
    }
}
