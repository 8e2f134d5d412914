use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactMessage;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    #[error("Email relay is not configured")]
    NotConfigured,
    #[error("Couldn't reach email relay: {0}")]
    Transport(String),
    #[error("Email relay rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Hands a validated contact message to whatever actually delivers it.
#[allow(async_fn_in_trait)]
pub trait ContactRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// EmailJS identifiers. These are public values, baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Option<Self> {
        let config = Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        };
        let complete = [&config.service_id, &config.template_id, &config.public_key]
            .iter()
            .all(|v| !v.trim().is_empty());
        complete.then_some(config)
    }

    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY` from the build environment.
    pub fn from_build_env() -> Option<Self> {
        Self::new(
            option_env!("EMAILJS_SERVICE_ID")?,
            option_env!("EMAILJS_TEMPLATE_ID")?,
            option_env!("EMAILJS_PUBLIC_KEY")?,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> EmailJsPayload<'a> {
    pub fn new(config: &'a RelayConfig, recipient: &'a str, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: message.name(),
                from_email: message.email(),
                message: message.message(),
                to_name: recipient,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: Option<RelayConfig>,
    recipient: String,
}

impl EmailJsRelay {
    pub fn new(config: Option<RelayConfig>, recipient: impl Into<String>) -> Self {
        Self {
            config,
            recipient: recipient.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Name shown as the addressee in the delivered email.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[cfg(feature = "hydrate")]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let config = self.config.as_ref().ok_or(RelayError::NotConfigured)?;
        let payload = EmailJsPayload::new(config, &self.recipient, message);
        let response = Request::post(EMAILJS_SEND_URL)
            .json(&payload)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        if response.ok() {
            log::debug!("contact message relayed for {}", message.email());
            return Ok(());
        }
        let status = StatusCode::from_u16(response.status()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}

#[cfg(not(feature = "hydrate"))]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        // only the browser talks to EmailJS
        Err(RelayError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;

    fn message() -> ContactMessage {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_config_requires_every_value() {
        assert!(RelayConfig::new("svc", "tpl", "key").is_some());
        assert!(RelayConfig::new("svc", " ", "key").is_none());
        assert!(RelayConfig::new("", "tpl", "key").is_none());
    }

    #[test]
    fn test_payload_shape() {
        let config = RelayConfig::new("service_x", "template_y", "public_z").unwrap();
        let message = message();
        let payload = EmailJsPayload::new(&config, "Fajar", &message);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "public_z",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                    "to_name": "Fajar",
                }
            })
        );
    }

    #[test]
    fn test_rejected_error_reports_status() {
        let err = RelayError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: "The public key is required".into(),
        };
        assert_eq!(
            err.to_string(),
            "Email relay rejected the message (400 Bad Request): The public key is required"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails() {
        let relay = EmailJsRelay::new(None, "Fajar");
        assert!(!relay.is_configured());
        assert_eq!(relay.recipient(), "Fajar");
        assert_eq!(relay.send(&message()).await, Err(RelayError::NotConfigured));
    }
}
