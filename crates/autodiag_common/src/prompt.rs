//! Prompt construction and response parsing for the diagnosis service.
//!
//! The model is asked for a schema-constrained JSON array of fault
//! suggestions, answered in the requested language. Parsing is tolerant of
//! the usual LLM wrapping (markdown fences, envelope objects).

use serde_json::Value;

use crate::types::{DiagnosisRecord, LanguageCode, VehicleQuery};

/// Response schema shown to the model. Severity stays an English token in
/// every language so the enum parse remains closed.
const RESPONSE_SCHEMA: &str = r#"[{"faultName":"...","description":"...","causes":["..."],"solutions":["..."],"severity":"Low|Medium|High|Critical"}]"#;

/// Build the system prompt fixing persona, schema, and answer language.
pub fn build_system_prompt(lang: LanguageCode) -> String {
    format!(
        r#"You are an expert automotive mechanic. Diagnose the described vehicle problem.
Answer in {}. Output JSON only, no prose, matching this schema:
{}
Rules: list 1 to 4 likely faults, most likely first. Keep descriptions short.
"severity" must be exactly one of Low, Medium, High, Critical regardless of the answer language.
JSON ONLY."#,
        lang.english_name(),
        RESPONSE_SCHEMA
    )
}

/// Build the user prompt embedding the vehicle details.
pub fn build_user_prompt(query: &VehicleQuery) -> String {
    format!(
        "Vehicle: make={}, model={}, year={}\nSymptoms: {}",
        query.make.trim(),
        query.model.trim(),
        query.year.trim(),
        query.symptoms.trim()
    )
}

/// Extract JSON from an LLM response (handles markdown code blocks).
pub fn extract_json(response: &str) -> Result<String, String> {
    let t = response.trim();

    // Direct JSON
    if (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']')) {
        return Ok(t.to_string());
    }

    // Markdown code block
    if let Some(s) = t.find("```json") {
        let body = &t[s + 7..];
        if let Some(e) = body.find("```") {
            return Ok(body[..e].trim().to_string());
        }
    }
    if let Some(s) = t.find("```") {
        let body = &t[s + 3..];
        if let Some(e) = body.find("```") {
            let inner = body[..e].trim();
            // Skip a possible language tag line
            let inner = inner
                .strip_prefix("json")
                .map(str::trim)
                .unwrap_or(inner);
            if !inner.is_empty() {
                return Ok(inner.to_string());
            }
        }
    }

    // Find an array or object anywhere
    if let (Some(s), Some(e)) = (t.find('['), t.rfind(']')) {
        if s < e {
            return Ok(t[s..=e].to_string());
        }
    }
    if let (Some(s), Some(e)) = (t.find('{'), t.rfind('}')) {
        if s < e {
            return Ok(t[s..=e].to_string());
        }
    }

    Err("No valid JSON found".to_string())
}

/// Parse a JSON value into diagnosis records.
///
/// Accepts a bare array or an envelope object with a "results" (or
/// "diagnoses") array. Records without a fault name are dropped.
pub fn parse_records(value: &Value) -> Result<Vec<DiagnosisRecord>, String> {
    let array = match value {
        Value::Array(_) => value.clone(),
        Value::Object(map) => map
            .get("results")
            .or_else(|| map.get("diagnoses"))
            .cloned()
            .ok_or_else(|| "Expected an array of diagnosis records".to_string())?,
        _ => return Err("Expected an array of diagnosis records".to_string()),
    };

    let records: Vec<DiagnosisRecord> = serde_json::from_value(array)
        .map_err(|e| format!("Invalid diagnosis record: {}", e))?;

    Ok(records
        .into_iter()
        .filter(|r| !r.fault_name.trim().is_empty())
        .collect())
}

/// Parse raw response text into diagnosis records.
pub fn parse_response(response: &str) -> Result<Vec<DiagnosisRecord>, String> {
    let json_str = extract_json(response)?;
    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| format!("Response is not valid JSON: {}", e))?;
    parse_records(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn sample_query() -> VehicleQuery {
        VehicleQuery {
            make: "Toyota".into(),
            model: "Camry".into(),
            year: "2018".into(),
            symptoms: "engine knocking on cold start".into(),
        }
    }

    #[test]
    fn test_user_prompt_embeds_all_fields() {
        let prompt = build_user_prompt(&sample_query());
        assert!(prompt.contains("Toyota"));
        assert!(prompt.contains("Camry"));
        assert!(prompt.contains("2018"));
        assert!(prompt.contains("engine knocking on cold start"));
    }

    #[test]
    fn test_system_prompt_names_answer_language() {
        assert!(build_system_prompt(LanguageCode::Fr).contains("Answer in French"));
        assert!(build_system_prompt(LanguageCode::Ar).contains("Answer in Arabic"));
        // Severity tokens pinned to English in every language
        assert!(build_system_prompt(LanguageCode::De).contains("Low, Medium, High, Critical"));
    }

    #[test]
    fn test_prompt_stays_small() {
        let total = build_system_prompt(LanguageCode::En).len()
            + build_user_prompt(&sample_query()).len();
        assert!(total < 2048, "prompt is {} bytes", total);
    }

    #[test]
    fn test_extract_json_direct_array() {
        let json = r#"[{"faultName": "X"}]"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_markdown() {
        let response = "Here you go:\n```json\n[{\"faultName\": \"X\"}]\n```";
        assert!(extract_json(response).unwrap().starts_with('['));
    }

    #[test]
    fn test_extract_json_embedded() {
        let response = "Sure! [{\"faultName\": \"X\"}] hope that helps";
        assert_eq!(extract_json(response).unwrap(), r#"[{"faultName": "X"}]"#);
    }

    #[test]
    fn test_extract_json_garbage_fails() {
        assert!(extract_json("I cannot help with that.").is_err());
    }

    #[test]
    fn test_parse_response_bare_array() {
        let response = r#"[
            {"faultName": "Worn spark plugs", "description": "d", "causes": ["a", "b"], "solutions": ["s"], "severity": "High"},
            {"faultName": "Carbon buildup", "description": "d2", "causes": [], "solutions": [], "severity": "Low"}
        ]"#;
        let records = parse_response(response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fault_name, "Worn spark plugs");
        assert_eq!(records[0].causes, vec!["a", "b"]);
        assert_eq!(records[0].severity, Severity::High);
        assert_eq!(records[1].severity, Severity::Low);
    }

    #[test]
    fn test_parse_response_envelope_object() {
        let response = r#"{"results": [{"faultName": "X", "description": "d"}]}"#;
        let records = parse_response(response).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_response_empty_array_is_zero_records() {
        let records = parse_response("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_response_drops_nameless_records() {
        let response = r#"[{"faultName": "  ", "description": "d"}, {"faultName": "X", "description": "d"}]"#;
        let records = parse_response(response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fault_name, "X");
    }

    #[test]
    fn test_parse_response_rejects_non_array() {
        assert!(parse_response(r#"{"faultName": "X"}"#).is_err());
        assert!(parse_response(r#""just a string""#).is_err());
    }
}
