//! Contact form: validation and submission through a third-party form relay
//!
//! The relay accepts a JSON `{name, email, phone, message}` body and answers
//! with `{"success": bool}`. One request per submission, no retry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactMessage {
    /// Trimmed copy, or why it can't be sent
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationError> {
        let cleaned = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let missing: Vec<&'static str> = [
            ("name", &cleaned.name),
            ("email", &cleaned.email),
            ("phone", &cleaned.phone),
            ("message", &cleaned.message),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactValidationError::MissingFields(missing));
        }

        let email_ok = matches!(
            cleaned.email.split_once('@'),
            Some((local, domain)) if !local.is_empty() && !domain.is_empty()
        );
        if !email_ok {
            return Err(ContactValidationError::InvalidEmail(cleaned.email));
        }

        Ok(cleaned)
    }
}

/// What the visitor is told after submitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Failed,
    Invalid(String),
}

impl ContactNotice {
    pub fn text(&self) -> &str {
        match self {
            ContactNotice::Sent => "Message sent successfully!",
            ContactNotice::Failed => "Failed to send message. Please try again.",
            ContactNotice::Invalid(reason) => reason,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ContactNotice::Sent)
    }
}

// ============================================================================
// Relay Client
// ============================================================================

#[cfg(feature = "api")]
pub use relay::{FormRelayClient, RelayError};

#[cfg(feature = "api")]
mod relay {
    use super::ContactMessage;
    use reqwest::header::ACCEPT;
    use reqwest::Client;
    use serde::Deserialize;

    #[derive(Debug, thiserror::Error)]
    pub enum RelayError {
        #[error("no contact relay endpoint configured")]
        NotConfigured,
        #[error("relay request failed: {0}")]
        Transport(#[from] reqwest::Error),
        #[error("relay answered with status {0}")]
        Status(reqwest::StatusCode),
        #[error("relay response was not understood: {0}")]
        Decode(String),
        #[error("relay rejected the submission")]
        Rejected,
    }

    #[derive(Debug, Deserialize)]
    struct RelayResponse {
        #[serde(default)]
        success: bool,
    }

    #[derive(Clone)]
    pub struct FormRelayClient {
        client: Client,
        endpoint: Option<String>,
    }

    impl FormRelayClient {
        pub fn new(endpoint: Option<String>) -> Result<Self, RelayError> {
            let client = Client::builder().build()?;
            Ok(Self::with_client(client, endpoint))
        }

        pub fn with_client(client: Client, endpoint: Option<String>) -> Self {
            Self { client, endpoint }
        }

        pub fn endpoint(&self) -> Option<&str> {
            self.endpoint.as_deref()
        }

        /// Post one message to the relay.
        pub async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
            let endpoint = self.endpoint.as_deref().ok_or(RelayError::NotConfigured)?;

            tracing::debug!("Submitting contact message to {}", endpoint);
            let response = self
                .client
                .post(endpoint)
                .header(ACCEPT, "application/json")
                .json(message)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(RelayError::Status(status));
            }

            let body = response.bytes().await?;
            let parsed: RelayResponse = serde_json::from_slice(&body)
                .map_err(|e| RelayError::Decode(e.to_string()))?;

            if parsed.success {
                tracing::info!("Contact message relayed");
                Ok(())
            } else {
                Err(RelayError::Rejected)
            }
        }
    }
}
