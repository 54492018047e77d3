use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::contact::form::ContactForm;

pub const SUCCESS_MESSAGE: &str = "✓ Richiesta inviata con successo! Ti ricontatteremo presto.";
pub const INVALID_MESSAGE: &str = "Per favore, controlla i campi evidenziati e riprova.";

/// Display text is what the status line shows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Form endpoint non configurato. Sostituisci YOUR_FORM_ID con il tuo ID Formspree.")]
    NotConfigured,
    #[error("Si è verificato un errore. Riprova o contattaci direttamente.")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Errore durante l'invio. Riprova.")]
    Unknown,
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    errors: Option<Vec<ErrorItem>>,
}

#[derive(Deserialize, Debug)]
struct ErrorItem {
    message: String,
}

impl ErrorBody {
    pub fn into_error(self) -> SubmitError {
        match self.errors {
            Some(errors) if !errors.is_empty() => SubmitError::Rejected(
                errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => SubmitError::Unknown,
        }
    }
}

pub fn check_endpoint(endpoint: &str) -> Result<&str, SubmitError> {
    if endpoint.trim().is_empty() || endpoint.contains(config::FORM_PLACEHOLDER_ID) {
        return Err(SubmitError::NotConfigured);
    }
    Ok(endpoint)
}

pub async fn submit(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let endpoint = check_endpoint(endpoint)?;

    let data = FormData::new().map_err(|_| SubmitError::Unknown)?;
    for (name, value) in form.fields() {
        let _ = data.append_with_str(name, value);
    }

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    log::warn!("Contact form rejected with status: {}", response.status());
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.into_error()),
        Err(_) => Err(SubmitError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_endpoint_is_refused() {
        assert_eq!(
            check_endpoint("https://formspree.io/f/YOUR_FORM_ID"),
            Err(SubmitError::NotConfigured)
        );
        assert_eq!(check_endpoint("  "), Err(SubmitError::NotConfigured));
        assert_eq!(
            check_endpoint("https://formspree.io/f/xyzabc"),
            Ok("https://formspree.io/f/xyzabc")
        );
    }

    #[test]
    fn rejection_joins_server_messages() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"too many requests"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_error().to_string(),
            "should be an email, too many requests"
        );
    }

    #[test]
    fn body_without_errors_is_generic() {
        let body: ErrorBody = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(body.into_error(), SubmitError::Unknown);

        let empty: ErrorBody = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        assert_eq!(empty.into_error().to_string(), "Errore durante l'invio. Riprova.");
    }

    #[test]
    fn network_failure_shows_generic_text() {
        let err = SubmitError::Network("Failed to fetch".into());
        assert!(err.to_string().starts_with("Si è verificato un errore"));
    }
}
