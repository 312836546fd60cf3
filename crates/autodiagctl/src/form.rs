//! Form focus model for the four input fields.

use autodiag_common::i18n::Translation;
use autodiag_common::types::VehicleQuery;

/// Which form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Make,
    Model,
    Year,
    Symptoms,
}

impl FocusField {
    pub const ALL: [FocusField; 4] = [
        FocusField::Make,
        FocusField::Model,
        FocusField::Year,
        FocusField::Symptoms,
    ];

    pub fn next(&self) -> FocusField {
        match self {
            FocusField::Make => FocusField::Model,
            FocusField::Model => FocusField::Year,
            FocusField::Year => FocusField::Symptoms,
            FocusField::Symptoms => FocusField::Make,
        }
    }

    pub fn prev(&self) -> FocusField {
        match self {
            FocusField::Make => FocusField::Symptoms,
            FocusField::Model => FocusField::Make,
            FocusField::Year => FocusField::Model,
            FocusField::Symptoms => FocusField::Year,
        }
    }

    /// Localized label for this field.
    pub fn label(&self, t: &Translation) -> &'static str {
        match self {
            FocusField::Make => t.make,
            FocusField::Model => t.model,
            FocusField::Year => t.year,
            FocusField::Symptoms => t.symptoms,
        }
    }

    /// Whether this field must be filled before submission.
    pub fn is_required(&self) -> bool {
        !matches!(self, FocusField::Model)
    }

    pub fn value<'a>(&self, form: &'a VehicleQuery) -> &'a str {
        match self {
            FocusField::Make => &form.make,
            FocusField::Model => &form.model,
            FocusField::Year => &form.year,
            FocusField::Symptoms => &form.symptoms,
        }
    }

    pub fn value_mut<'a>(&self, form: &'a mut VehicleQuery) -> &'a mut String {
        match self {
            FocusField::Make => &mut form.make,
            FocusField::Model => &mut form.model,
            FocusField::Year => &mut form.year,
            FocusField::Symptoms => &mut form.symptoms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_common::i18n::translations;
    use autodiag_common::types::LanguageCode;

    #[test]
    fn test_focus_cycle_covers_all_fields() {
        let mut field = FocusField::Make;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, FocusField::Make);
        assert_eq!(seen, FocusField::ALL);
    }

    #[test]
    fn test_prev_inverts_next() {
        for field in FocusField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_only_model_is_optional() {
        for field in FocusField::ALL {
            assert_eq!(field.is_required(), field != FocusField::Model);
        }
    }

    #[test]
    fn test_field_editing() {
        let mut form = VehicleQuery::default();
        FocusField::Year.value_mut(&mut form).push_str("2018");
        assert_eq!(form.year, "2018");
        assert_eq!(FocusField::Year.value(&form), "2018");
        assert_eq!(FocusField::Make.value(&form), "");
    }

    #[test]
    fn test_localized_labels() {
        let t = translations(LanguageCode::De);
        assert_eq!(FocusField::Make.label(t), "Marke");
        assert_eq!(FocusField::Year.label(t), "Baujahr");
    }
}
