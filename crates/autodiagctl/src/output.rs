//! Result-card formatting shared by the CLI and tests.
//!
//! Builds plain text lines; callers apply color.

use autodiag_common::i18n::Translation;
use autodiag_common::types::{DiagnosisRecord, Severity};
use owo_colors::AnsiColors;

/// Marker prefixing each card's first line; tests count cards by it.
pub const CARD_MARKER: &str = "── ";

/// ANSI color for a severity badge.
pub fn severity_color(severity: Severity) -> AnsiColors {
    match severity {
        Severity::Low => AnsiColors::Green,
        Severity::Medium => AnsiColors::Yellow,
        Severity::High => AnsiColors::Red,
        Severity::Critical => AnsiColors::Magenta,
    }
}

/// Lines for one result card: fault name, severity badge, description,
/// then causes and solutions in the order the service returned them.
pub fn result_card_lines(record: &DiagnosisRecord, t: &Translation) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{}{}", CARD_MARKER, record.fault_name));
    lines.push(format!("{}: [{}]", t.severity, record.severity.label()));

    if !record.description.trim().is_empty() {
        lines.push(record.description.clone());
    }

    if !record.causes.is_empty() {
        lines.push(format!("{}:", t.possible_causes));
        for (i, cause) in record.causes.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, cause));
        }
    }

    if !record.solutions.is_empty() {
        lines.push(format!("{}:", t.solutions));
        for (i, solution) in record.solutions.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, solution));
        }
    }

    lines
}

/// Full result listing: title, one card per record (or the no-results
/// line), and the safety footer.
pub fn results_lines(records: &[DiagnosisRecord], t: &Translation) -> Vec<String> {
    let mut lines = vec![t.results_title.to_string(), String::new()];

    if records.is_empty() {
        lines.push(t.no_results.to_string());
    } else {
        for record in records {
            lines.extend(result_card_lines(record, t));
            lines.push(String::new());
        }
    }

    lines.push(format!("{}: {}", t.warning, t.safety_tip));
    lines.push(t.visit_mechanic.to_string());
    lines
}
