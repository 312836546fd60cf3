//! Diagnosis client.
//!
//! Calls an external LLM backend with a schema-constrained prompt and parses
//! the reply into `DiagnosisRecord`s. Supports Ollama and OpenAI-compatible
//! endpoints, plus a fake client for testing.

use anyhow::Result;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::prompt;
use crate::types::{DiagnosisRecord, LanguageCode, VehicleQuery};

/// Diagnosis errors. Distinguished for logging; the UI collapses all of
/// them into one localized message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DiagnosisError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Service returned empty response")]
    EmptyResponse,
}

/// Generic diagnosis client trait.
///
/// Callers are responsible for ensuring make and symptoms are non-empty;
/// the client performs no validation of its own.
pub trait DiagnosisClient: Send + Sync {
    /// One outbound request; no retry, no caching.
    fn diagnose(
        &self,
        query: &VehicleQuery,
        lang: LanguageCode,
    ) -> Result<Vec<DiagnosisRecord>, DiagnosisError>;
}

/// Real client implementation using HTTP.
pub struct HttpDiagnosisClient {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

impl HttpDiagnosisClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    /// Check if endpoint is Ollama-style
    fn is_ollama_endpoint(&self) -> bool {
        self.config.endpoint.contains("11434") || self.config.endpoint.contains("ollama")
    }

    fn map_send_error(&self, e: reqwest::Error) -> DiagnosisError {
        if e.is_timeout() {
            DiagnosisError::Timeout(self.config.timeout_secs)
        } else {
            DiagnosisError::Http(format!("Request failed: {}", e))
        }
    }

    /// Call Ollama-style API (`/api/generate` with JSON output mode).
    fn call_ollama(&self, system_prompt: &str, user_prompt: &str) -> Result<String, DiagnosisError> {
        let url = format!("{}/api/generate", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "prompt": format!("{}\n\n{}", system_prompt, user_prompt),
            "stream": false,
            "format": "json",
        });

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(DiagnosisError::Http(format!(
                "HTTP {} from Ollama",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| DiagnosisError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        response_json
            .get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(DiagnosisError::EmptyResponse)
    }

    /// Call OpenAI-compatible API (`/v1/chat/completions`).
    fn call_openai_compatible(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, DiagnosisError> {
        let url = format!("{}/v1/chat/completions", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "response_format": {"type": "json_object"},
        });

        let mut request = self.client.post(&url).json(&request_body);

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(DiagnosisError::Http(format!(
                "HTTP {} from OpenAI-compatible API",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| DiagnosisError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(DiagnosisError::EmptyResponse)
    }
}

impl DiagnosisClient for HttpDiagnosisClient {
    fn diagnose(
        &self,
        query: &VehicleQuery,
        lang: LanguageCode,
    ) -> Result<Vec<DiagnosisRecord>, DiagnosisError> {
        let system_prompt = prompt::build_system_prompt(lang);
        let user_prompt = prompt::build_user_prompt(query);

        tracing::info!(
            vehicle = %query.summary(),
            lang = %lang,
            "dispatching diagnosis request"
        );

        // Route on the endpoint shape alone: exactly one outbound request
        // per invocation, no fallback to the other API on failure.
        let text = if self.is_ollama_endpoint() {
            self.call_ollama(&system_prompt, &user_prompt)?
        } else {
            self.call_openai_compatible(&system_prompt, &user_prompt)?
        };

        let records = prompt::parse_response(&text).map_err(DiagnosisError::InvalidJson)?;

        tracing::info!(count = records.len(), "diagnosis parsed");
        Ok(records)
    }
}

/// Fake diagnosis client for testing.
pub struct FakeDiagnosisClient {
    responses: std::sync::Mutex<Vec<Result<Vec<DiagnosisRecord>, DiagnosisError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeDiagnosisClient {
    /// Create a fake client with pre-defined responses.
    pub fn new(responses: Vec<Result<Vec<DiagnosisRecord>, DiagnosisError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    /// Create a fake client that always returns the given records.
    pub fn always_records(records: Vec<DiagnosisRecord>) -> Self {
        Self::new(vec![Ok(records)])
    }

    /// Create a fake client that always returns an error.
    pub fn always_error(error: DiagnosisError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl DiagnosisClient for FakeDiagnosisClient {
    fn diagnose(
        &self,
        _query: &VehicleQuery,
        _lang: LanguageCode,
    ) -> Result<Vec<DiagnosisRecord>, DiagnosisError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(DiagnosisError::EmptyResponse);
        }

        if responses.len() == 1 {
            // Keep returning the same response
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
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

    fn sample_record(name: &str) -> DiagnosisRecord {
        DiagnosisRecord {
            fault_name: name.to_string(),
            description: "desc".to_string(),
            causes: vec!["cause".to_string()],
            solutions: vec!["fix".to_string()],
            severity: Severity::High,
        }
    }

    #[test]
    fn test_fake_client_always_records() {
        let client = FakeDiagnosisClient::always_records(vec![sample_record("A")]);

        let result = client.diagnose(&sample_query(), LanguageCode::En).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].fault_name, "A");
        assert_eq!(client.call_count(), 1);

        // Same response on repeat calls
        let again = client.diagnose(&sample_query(), LanguageCode::En).unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(client.call_count(), 2);
    }

    #[test]
    fn test_fake_client_always_error() {
        let client = FakeDiagnosisClient::always_error(DiagnosisError::EmptyResponse);

        let result = client.diagnose(&sample_query(), LanguageCode::Ar);
        assert!(result.is_err());
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_fake_client_scripted_sequence() {
        let client = FakeDiagnosisClient::new(vec![
            Ok(vec![sample_record("first")]),
            Ok(vec![]),
            Err(DiagnosisError::Timeout(60)),
        ]);

        let r1 = client.diagnose(&sample_query(), LanguageCode::En).unwrap();
        assert_eq!(r1[0].fault_name, "first");

        // Empty result set is a success, not an error
        let r2 = client.diagnose(&sample_query(), LanguageCode::En).unwrap();
        assert!(r2.is_empty());

        let r3 = client.diagnose(&sample_query(), LanguageCode::En);
        assert!(matches!(r3, Err(DiagnosisError::Timeout(60))));
        assert_eq!(client.call_count(), 3);
    }

    /// Minimal HTTP stub: answers every request with the given status line
    /// and records the request line of each connection.
    fn spawn_stub_server(response: &'static str) -> (String, std::sync::Arc<std::sync::Mutex<Vec<String>>>) {
        use std::io::{Read, Write};
        use std::sync::{Arc, Mutex};

        let listener = loop {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            // Port 11434 would make any endpoint look like Ollama
            if l.local_addr().unwrap().port() != 11434 {
                break l;
            }
        };
        let addr = listener.local_addr().unwrap();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut buf = [0u8; 4096];
                let n = stream.read(&mut buf).unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).to_string();
                if let Some(line) = head.lines().next() {
                    seen.lock().unwrap().push(line.to_string());
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });

        (format!("http://{}", addr), requests)
    }

    const STUB_500: &str =
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n";

    #[test]
    fn test_ollama_endpoint_sends_exactly_one_request_on_failure() {
        let (base, requests) = spawn_stub_server(STUB_500);
        let client = HttpDiagnosisClient::new(LlmConfig {
            endpoint: format!("{}/ollama", base),
            timeout_secs: 5,
            ..LlmConfig::default()
        })
        .unwrap();

        let result = client.diagnose(&sample_query(), LanguageCode::En);
        assert!(matches!(result, Err(DiagnosisError::Http(_))));

        let seen = requests.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected one outbound request, saw {:?}", *seen);
        assert!(seen[0].contains("/ollama/api/generate"));
    }

    #[test]
    fn test_openai_endpoint_routes_to_chat_completions_only() {
        let (base, requests) = spawn_stub_server(STUB_500);
        let client = HttpDiagnosisClient::new(LlmConfig {
            endpoint: base,
            timeout_secs: 5,
            ..LlmConfig::default()
        })
        .unwrap();

        let result = client.diagnose(&sample_query(), LanguageCode::En);
        assert!(matches!(result, Err(DiagnosisError::Http(_))));

        let seen = requests.lock().unwrap();
        assert_eq!(seen.len(), 1, "expected one outbound request, saw {:?}", *seen);
        assert!(seen[0].contains("/v1/chat/completions"));
    }

    #[test]
    fn test_http_client_builds_from_default_config() {
        let client = HttpDiagnosisClient::new(LlmConfig::default()).unwrap();
        assert!(client.is_ollama_endpoint());

        let remote = HttpDiagnosisClient::new(LlmConfig {
            endpoint: "https://api.example.com".to_string(),
            ..LlmConfig::default()
        })
        .unwrap();
        assert!(!remote.is_ollama_endpoint());
    }
}
