//! AI insight adapter (Google Gemini).
//!
//! Strictly decorative output: everything here degrades to a fixed Spanish
//! fallback string instead of an error, so a missing key or a flaky service
//! never breaks a calling screen. The rest of the crate returns `Result`;
//! this module deliberately does not.

use std::sync::Arc;

use mw_core::Appointment;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.5-flash";

const MSG_NOT_CONFIGURED: &str = "Servicio de IA no configurado (Falta API Key).";
const MSG_EMPTY_DESCRIPTION: &str = "No se pudo generar la descripción.";
const MSG_DESCRIPTION_ERROR: &str = "Error al conectar con el servicio de IA.";
const MSG_EMPTY_SUMMARY: &str = "No hay información disponible.";
const MSG_SUMMARY_ERROR: &str = "Servicio de IA no disponible momentáneamente.";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the generative-text service.
#[derive(Clone)]
pub struct InsightClient {
    inner: Arc<InsightClientInner>,
}

struct InsightClientInner {
    client: reqwest::Client,
    api_key: Option<SecretString>,
}

impl InsightClient {
    /// Create a new insight client. A `None` key yields a client whose
    /// methods return the not-configured fallback.
    #[must_use]
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            inner: Arc::new(InsightClientInner {
                client: reqwest::Client::new(),
                api_key,
            }),
        }
    }

    /// Whether a key is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.api_key.is_some()
    }

    /// Generate a short sales description for a catalog entry.
    ///
    /// `notes` carries free-text context (a draft description, key specs);
    /// pass an empty string when there is none. Always returns displayable
    /// text; failures map to fixed fallbacks.
    #[instrument(skip(self, notes))]
    pub async fn product_description(&self, name: &str, category: &str, notes: &str) -> String {
        if !self.is_configured() {
            return MSG_NOT_CONFIGURED.to_owned();
        }

        let prompt = description_prompt(name, category, notes);

        match self.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => MSG_EMPTY_DESCRIPTION.to_owned(),
            Err(e) => {
                warn!(error = %e, "description generation failed");
                MSG_DESCRIPTION_ERROR.to_owned()
            }
        }
    }

    /// Summarize the day's appointments for the dashboard.
    ///
    /// An unconfigured client stays quiet here (empty string) because the
    /// dashboard renders this inline rather than as its own panel.
    #[instrument(skip_all, fields(appointments = appointments.len()))]
    pub async fn schedule_summary(&self, appointments: &[Appointment]) -> String {
        if !self.is_configured() {
            return String::new();
        }

        let prompt = summary_prompt(appointments);

        match self.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => MSG_EMPTY_SUMMARY.to_owned(),
            Err(e) => {
                warn!(error = %e, "schedule summary failed");
                MSG_SUMMARY_ERROR.to_owned()
            }
        }
    }

    /// Single-turn text generation. `Ok(None)` means the service answered
    /// but produced no usable text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, reqwest::Error> {
        let Some(api_key) = self.inner.api_key.as_ref() else {
            return Ok(None);
        };

        let url = format!(
            "{BASE_URL}/models/{MODEL}:generateContent?key={}",
            api_key.expose_secret()
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response: GenerateResponse = self
            .inner
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_owned())
            .filter(|t| !t.is_empty());
        Ok(text)
    }
}

/// Prompt for a catalog description: name, category, and whatever free-text
/// context the caller has, capped at 60 words of output.
fn description_prompt(name: &str, category: &str, notes: &str) -> String {
    let context = if notes.trim().is_empty() {
        String::new()
    } else {
        format!(" Contexto adicional: {notes}.")
    };
    format!(
        "Genera una descripción de venta atractiva (máximo 60 palabras, en \
         español) para el producto \"{name}\" de la categoría \
         \"{category}\".{context} Responde solo con la descripción."
    )
}

/// Prompt for the dashboard summary. Only date, service, and status travel
/// to the external service; client names stay local.
fn summary_prompt(appointments: &[Appointment]) -> String {
    let listing = appointments
        .iter()
        .map(|a| format!("- {}: {} [{}]", a.date, a.service, a.status))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Eres el asistente de una agenda comercial. Resume en español, en 2 \
         oraciones, la siguiente lista de citas, destacando la carga del \
         día:\n{listing}"
    )
}

impl std::fmt::Debug for InsightClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightClient")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use chrono::NaiveTime;
    use mw_core::{AppointmentId, AppointmentStatus};

    #[tokio::test]
    async fn test_unconfigured_description_fallback() {
        let client = InsightClient::new(None);
        let text = client
            .product_description("Taladro", "Herramientas", "")
            .await;
        assert_eq!(text, MSG_NOT_CONFIGURED);
    }

    #[test]
    fn test_description_prompt_carries_context_and_word_cap() {
        let prompt = description_prompt("Taladro", "Herramientas", "800W, incluye brocas");
        assert!(prompt.contains("máximo 60 palabras"));
        assert!(prompt.contains("\"Taladro\""));
        assert!(prompt.contains("\"Herramientas\""));
        assert!(prompt.contains("800W, incluye brocas"));

        let bare = description_prompt("Taladro", "Herramientas", "  ");
        assert!(!bare.contains("Contexto adicional"));
    }

    #[test]
    fn test_summary_prompt_sends_no_client_names() {
        let appointments = vec![Appointment {
            id: AppointmentId::new("a-1"),
            client_name: "María Gómez".to_owned(),
            date: "2026-03-01".parse().unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            service: "Mantenimiento".to_owned(),
            status: AppointmentStatus::Confirmed,
            notes: None,
            seller_id: None,
        }];
        let prompt = summary_prompt(&appointments);
        assert!(prompt.contains("2 oraciones"));
        assert!(prompt.contains("2026-03-01"));
        assert!(prompt.contains("Mantenimiento"));
        assert!(prompt.contains("confirmed"));
        assert!(!prompt.contains("María"));
    }

    #[tokio::test]
    async fn test_unconfigured_summary_is_silent() {
        let client = InsightClient::new(None);
        assert_eq!(client.schedule_summary(&[]).await, "");
    }

    #[test]
    fn test_response_extraction_shape() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "  Un gran producto. " } ] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_owned())
            .filter(|t| !t.is_empty());
        assert_eq!(text.as_deref(), Some("Un gran producto."));
    }

    #[test]
    fn test_empty_candidates_decode() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
