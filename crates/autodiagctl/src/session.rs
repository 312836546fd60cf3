//! Diagnosis session state machine.
//!
//! Replaces the ad hoc loading/result/error flag combination with explicit
//! phases. Only one request can be in flight: submit is refused while
//! Loading, and there is no cancellation.

use autodiag_common::i18n::{translations, Translation};
use autodiag_common::types::{DiagnosisRecord, LanguageCode, VehicleQuery};

/// Session phase. Success and Failed are mutually exclusive by
/// construction; an empty Success is "no faults identified", not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success(Vec<DiagnosisRecord>),
    Failed(String),
}

/// One user session: language, draft form, and phase.
#[derive(Debug, Clone)]
pub struct Session {
    pub lang: LanguageCode,
    pub form: VehicleQuery,
    pub phase: Phase,
}

impl Session {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            form: VehicleQuery::default(),
            phase: Phase::Idle,
        }
    }

    /// Current UI string set.
    pub fn translation(&self) -> &'static Translation {
        translations(self.lang)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Required-field gate: make, year, and symptoms must be non-empty.
    /// Model is optional.
    pub fn form_is_complete(&self) -> bool {
        !self.form.make.trim().is_empty()
            && !self.form.year.trim().is_empty()
            && !self.form.symptoms.trim().is_empty()
    }

    /// Try to start a diagnosis. Returns the query to dispatch, or None if
    /// the form is incomplete or a request is already in flight. No
    /// external call happens unless this returns Some.
    pub fn submit(&mut self) -> Option<VehicleQuery> {
        if self.is_loading() || !self.form_is_complete() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(self.form.clone())
    }

    /// Record a successful call. Ignored outside Loading.
    pub fn resolve_success(&mut self, records: Vec<DiagnosisRecord>) {
        if self.is_loading() {
            self.phase = Phase::Success(records);
        }
    }

    /// Record a failed call. The detail string is kept for logs; the UI
    /// shows only the localized generic error.
    pub fn resolve_failure(&mut self, detail: String) {
        if self.is_loading() {
            tracing::warn!(error = %detail, "diagnosis failed");
            self.phase = Phase::Failed(detail);
        }
    }

    /// Clear form, results, and error back to initial empty values.
    pub fn reset(&mut self) {
        self.form = VehicleQuery::default();
        self.phase = Phase::Idle;
    }

    /// Switch UI language. Affects labels only, never the phase.
    pub fn set_language(&mut self, lang: LanguageCode) {
        self.lang = lang;
    }
}
