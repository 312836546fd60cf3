//! AutoDiag shared library
//!
//! Data model, translation table, configuration, and the diagnosis client
//! that turns a vehicle/symptom description into structured fault
//! suggestions via an external LLM endpoint.

pub mod config;
pub mod diagnosis;
pub mod i18n;
pub mod prompt;
pub mod types;

pub use config::AutodiagConfig;
pub use diagnosis::{DiagnosisClient, DiagnosisError, FakeDiagnosisClient, HttpDiagnosisClient};
pub use i18n::{translations, Translation, SUPPORTED_LANGUAGES};
pub use types::{DiagnosisRecord, LanguageCode, Severity, VehicleQuery};
