//! Core data model: vehicle queries, diagnosis records, severity levels,
//! and the closed set of UI languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-submitted vehicle and symptom details. All fields are free text;
/// created fresh per submission and discarded on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQuery {
    pub make: String,
    pub model: String,
    pub year: String,
    pub symptoms: String,
}

impl VehicleQuery {
    /// One-line summary for logging ("Toyota Camry 2018").
    pub fn summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for p in [&self.make, &self.model, &self.year] {
            if !p.trim().is_empty() {
                parts.push(p.trim());
            }
        }
        parts.join(" ")
    }
}

/// Urgency classification for a suggested fault. Display-only: nothing
/// branches on it beyond badge color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Badge label. The model is instructed to emit these exact tokens
    /// regardless of the answer language, so badges stay uniform.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Parse a severity token from the model, case-insensitive.
    /// Unrecognized tokens degrade to Medium rather than failing the
    /// whole response.
    pub fn parse_lenient(s: &str) -> Severity {
        match s.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Medium,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One suggested fault parsed from the diagnosis service. Immutable once
/// created; causes and solutions keep the order the service returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    #[serde(rename = "faultName")]
    pub fault_name: String,
    pub description: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(deserialize_with = "deserialize_severity", default = "default_severity")]
    pub severity: Severity,
}

fn default_severity() -> Severity {
    Severity::Medium
}

fn deserialize_severity<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Severity::parse_lenient(&s))
}

/// Closed set of UI languages, fixed by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Ar,
    En,
    Fr,
    De,
    Es,
}

impl LanguageCode {
    /// Two-letter code as used in config files and `--lang`.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Ar => "ar",
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Es => "es",
        }
    }

    /// Native display name, shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::Ar => "العربية",
            LanguageCode::En => "English",
            LanguageCode::Fr => "Français",
            LanguageCode::De => "Deutsch",
            LanguageCode::Es => "Español",
        }
    }

    /// English language name, used in the prompt's "answer in X" clause.
    pub fn english_name(&self) -> &'static str {
        match self {
            LanguageCode::Ar => "Arabic",
            LanguageCode::En => "English",
            LanguageCode::Fr => "French",
            LanguageCode::De => "German",
            LanguageCode::Es => "Spanish",
        }
    }

    /// Right-to-left script flag; drives text alignment in the TUI.
    pub fn is_rtl(&self) -> bool {
        matches!(self, LanguageCode::Ar)
    }

    /// Parse a two-letter code.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        match code.trim().to_lowercase().as_str() {
            "ar" => Some(LanguageCode::Ar),
            "en" => Some(LanguageCode::En),
            "fr" => Some(LanguageCode::Fr),
            "de" => Some(LanguageCode::De),
            "es" => Some(LanguageCode::Es),
            _ => None,
        }
    }

    /// Next language in selector order, wrapping. Used by the TUI's
    /// language-cycle key.
    pub fn next(&self) -> LanguageCode {
        match self {
            LanguageCode::Ar => LanguageCode::En,
            LanguageCode::En => LanguageCode::Fr,
            LanguageCode::Fr => LanguageCode::De,
            LanguageCode::De => LanguageCode::Es,
            LanguageCode::Es => LanguageCode::Ar,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_lenient() {
        assert_eq!(Severity::parse_lenient("Low"), Severity::Low);
        assert_eq!(Severity::parse_lenient("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse_lenient("  high "), Severity::High);
        // Unknown tokens degrade to Medium
        assert_eq!(Severity::parse_lenient("urgent"), Severity::Medium);
        assert_eq!(Severity::parse_lenient(""), Severity::Medium);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_language_code_round_trip() {
        for lang in [
            LanguageCode::Ar,
            LanguageCode::En,
            LanguageCode::Fr,
            LanguageCode::De,
            LanguageCode::Es,
        ] {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(lang));
        }
        assert_eq!(LanguageCode::from_code("xx"), None);
    }

    #[test]
    fn test_language_cycle_covers_all() {
        let mut lang = LanguageCode::Ar;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(lang, LanguageCode::Ar);
        assert_eq!(seen.len(), 5);
        assert!(seen.contains(&LanguageCode::Es));
    }

    #[test]
    fn test_rtl_flag() {
        assert!(LanguageCode::Ar.is_rtl());
        assert!(!LanguageCode::En.is_rtl());
        assert!(!LanguageCode::Fr.is_rtl());
    }

    #[test]
    fn test_record_deserializes_wire_format() {
        let json = r#"{
            "faultName": "Worn spark plugs",
            "description": "Ignition misfire under load.",
            "causes": ["Age", "Carbon fouling"],
            "solutions": ["Replace plugs"],
            "severity": "High"
        }"#;
        let record: DiagnosisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fault_name, "Worn spark plugs");
        assert_eq!(record.causes, vec!["Age", "Carbon fouling"]);
        assert_eq!(record.severity, Severity::High);
    }

    #[test]
    fn test_record_missing_severity_defaults_medium() {
        let json = r#"{"faultName": "X", "description": "Y"}"#;
        let record: DiagnosisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.severity, Severity::Medium);
        assert!(record.causes.is_empty());
    }

    #[test]
    fn test_query_summary() {
        let q = VehicleQuery {
            make: "Toyota".into(),
            model: "Camry".into(),
            year: "2018".into(),
            symptoms: "knocking".into(),
        };
        assert_eq!(q.summary(), "Toyota Camry 2018");

        let partial = VehicleQuery {
            make: "BMW".into(),
            ..Default::default()
        };
        assert_eq!(partial.summary(), "BMW");
    }
}
