// SPDX-License-Identifier: MPL-2.0
//! Webhook endpoint configuration and the outbound print-job request.
//!
//! The portal itself does no print processing: it hands the document to an
//! external webhook as a single `multipart/form-data` POST and reports the
//! outcome. This module owns the environment-derived endpoint configuration
//! (read once at startup, immutable afterwards) and the request itself.

use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the static API key sent with every request.
pub const ENV_API_KEY: &str = "PRINT_PORTAL_API_KEY";

/// Environment variable holding the webhook URL.
pub const ENV_WEBHOOK_URL: &str = "PRINT_PORTAL_WEBHOOK_URL";

/// Environment variable overriding the window title.
pub const ENV_APP_TITLE: &str = "PRINT_PORTAL_APP_TITLE";

/// Window title used when `PRINT_PORTAL_APP_TITLE` is not set.
pub const DEFAULT_APP_TITLE: &str = "Web Print Portal";

/// Header carrying the API key on the outbound request.
const API_KEY_HEADER: &str = "X-API-KEY";

const USER_AGENT: &str = concat!("PrintPortal/", env!("CARGO_PKG_VERSION"));

/// Endpoint configuration read once from the environment at startup.
///
/// Missing required values do not block startup; they surface as a
/// submission-time error so the window still opens and explains itself.
#[derive(Clone)]
pub struct WebhookConfig {
    api_key: Option<String>,
    webhook_url: Option<String>,
    pub app_title: String,
}

impl WebhookConfig {
    pub fn new(
        api_key: Option<String>,
        webhook_url: Option<String>,
        app_title: impl Into<String>,
    ) -> Self {
        Self {
            api_key: normalize(api_key),
            webhook_url: normalize(webhook_url),
            app_title: app_title.into(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        let app_title = std::env::var(ENV_APP_TITLE)
            .ok()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string());

        Self::new(
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_WEBHOOK_URL).ok(),
            app_title,
        )
    }

    /// Returns the endpoint when both required values are present.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match (&self.webhook_url, &self.api_key) {
            (Some(url), Some(key)) => Some(Endpoint {
                url: url.clone(),
                api_key: key.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Debug for WebhookConfig {
    // The API key stays out of logs and debug dumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("webhook_url", &self.webhook_url)
            .field("app_title", &self.app_title)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Empty environment values count as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A fully resolved target for one submission.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub api_key: String,
}

/// Everything the outbound request needs, captured at submit time so the
/// form can keep changing while the request is in flight.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub endpoint: Endpoint,
    pub file_path: PathBuf,
    pub file_name: String,
    pub copies: u32,
}

/// Failure modes of a single submission attempt. None of these are retried;
/// each maps to a user-facing status message via [`SubmitError::user_message`].
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// The webhook answered outside the 2xx range.
    Rejected { status: u16, body: String },
    /// The request itself failed (connection, DNS, abort).
    Transport(String),
    /// The selected document could not be read before sending.
    File(String),
}

impl SubmitError {
    /// Message shown in the status banner. Transport and file details stay in
    /// the logs; the user sees generic text for those.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { body, .. } => {
                let body = body.trim();
                if body.is_empty() {
                    "Could not send print job.".to_string()
                } else {
                    body.to_string()
                }
            }
            SubmitError::Transport(_) => {
                "Network error. Could not reach the print service.".to_string()
            }
            SubmitError::File(_) => "Could not read the selected document.".to_string(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected { status, body } => {
                write!(f, "webhook rejected the job (HTTP {status}): {body}")
            }
            SubmitError::Transport(msg) => write!(f, "transport failure: {msg}"),
            SubmitError::File(msg) => write!(f, "could not read document: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Sends one print job to the webhook.
///
/// Exactly one POST per call: the document bytes go under the `file` part
/// (original filename preserved) and the copy count under `copies`. Success
/// is any 2xx status; everything else becomes a [`SubmitError`].
///
/// # Errors
///
/// Returns an error if the document cannot be read, the request fails at the
/// transport level, or the webhook answers outside the 2xx range.
pub async fn send_print_job(request: SubmitRequest) -> Result<(), SubmitError> {
    let bytes = tokio::fs::read(&request.file_path)
        .await
        .map_err(|e| SubmitError::File(e.to_string()))?;

    let document = reqwest::multipart::Part::bytes(bytes).file_name(request.file_name.clone());
    let form = reqwest::multipart::Form::new()
        .part("file", document)
        .text("copies", request.copies.to_string());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let response = client
        .post(&request.endpoint.url)
        .header(API_KEY_HEADER, &request.endpoint.api_key)
        .multipart(form)
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // The webhook's own explanation, when it gives one, is shown verbatim.
    let body = response.text().await.unwrap_or_default();
    Err(SubmitError::Rejected {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_reads_all_three_variables() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_API_KEY, "secret");
        std::env::set_var(ENV_WEBHOOK_URL, "https://print.example/hook");
        std::env::set_var(ENV_APP_TITLE, "Office Printer");

        let config = WebhookConfig::from_env();
        let endpoint = config.endpoint().expect("endpoint should be configured");
        assert_eq!(endpoint.url, "https://print.example/hook");
        assert_eq!(endpoint.api_key, "secret");
        assert_eq!(config.app_title, "Office Printer");

        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_WEBHOOK_URL);
        std::env::remove_var(ENV_APP_TITLE);
    }

    #[test]
    fn missing_title_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_APP_TITLE);
        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_WEBHOOK_URL);

        let config = WebhookConfig::from_env();
        assert_eq!(config.app_title, DEFAULT_APP_TITLE);
    }

    #[test]
    fn endpoint_requires_both_values() {
        let config = WebhookConfig::new(Some("key".into()), None, DEFAULT_APP_TITLE);
        assert!(config.endpoint().is_none());

        let config = WebhookConfig::new(None, Some("https://x".into()), DEFAULT_APP_TITLE);
        assert!(config.endpoint().is_none());

        let config = WebhookConfig::new(
            Some("key".into()),
            Some("https://x".into()),
            DEFAULT_APP_TITLE,
        );
        assert!(config.endpoint().is_some());
    }

    #[test]
    fn blank_values_count_as_absent() {
        let config = WebhookConfig::new(Some("  ".into()), Some(String::new()), DEFAULT_APP_TITLE);
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn rejection_message_prefers_body_text() {
        let err = SubmitError::Rejected {
            status: 500,
            body: "printer offline\n".to_string(),
        };
        assert_eq!(err.user_message(), "printer offline");
    }

    #[test]
    fn rejection_message_falls_back_when_body_is_blank() {
        let err = SubmitError::Rejected {
            status: 502,
            body: "  \n".to_string(),
        };
        assert_eq!(err.user_message(), "Could not send print job.");
    }

    #[test]
    fn transport_message_is_generic() {
        let err = SubmitError::Transport("dns failure: no such host".to_string());
        let message = err.user_message();
        assert!(!message.contains("dns"));
        assert!(message.contains("Network error"));
    }

    #[test]
    fn debug_output_hides_the_api_key() {
        let config = WebhookConfig::new(
            Some("super-secret".into()),
            Some("https://x".into()),
            DEFAULT_APP_TITLE,
        );
        let dump = format!("{config:?}");
        assert!(!dump.contains("super-secret"));
    }
}
