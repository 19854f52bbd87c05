//! EmailJS REST relay.

use super::{ContactRelay, ContactRequest, TemplateFields};
use crate::config::RelayConfig;
use crate::domain::RelayError;
use async_trait::async_trait;
use serde::Serialize;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateFields,
}

/// Relay posting JSON to the EmailJS `email/send` endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsRelay {
    /// Creates a relay for the given API origin, e.g. `https://api.emailjs.com`.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a relay for the endpoint in `config`.
    #[must_use]
    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(&config.endpoint)
    }

    fn send_url(&self) -> String {
        format!("{}{SEND_PATH}", self.endpoint)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        if !request.has_credentials() {
            tracing::warn!("relay credentials missing, not sending");
            return Err(RelayError::NotConfigured);
        }

        let payload = SendPayload {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.fields,
        };

        tracing::debug!(url = %self.send_url(), subject = %request.fields.subject, "sending enquiry");

        let response = self
            .client
            .post(self.send_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "enquiry delivered");
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %message, "relay rejected enquiry");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: message.trim().to_string(),
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ContactRequest {
        ContactRequest {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            fields: TemplateFields {
                full_name: "Jane Doe".to_string(),
                reply_to: "jane@x.com".to_string(),
                category: "General enquiry".to_string(),
                message: "Hello".to_string(),
                subject: "AV enquiry (General enquiry) from Jane Doe".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn posts_template_params_to_send_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "fullName": "Jane Doe",
                    "replyTo": "jane@x.com",
                    "category": "General enquiry",
                    "message": "Hello",
                    "subject": "AV enquiry (General enquiry) from Jane Doe"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&format!("{}/", server.uri()));
        assert_eq!(relay.send(&request()).await, Ok(()));
    }

    #[tokio::test]
    async fn rejection_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&server.uri());
        assert_eq!(
            relay.send(&request()).await,
            Err(RelayError::Rejected {
                status: 400,
                message: "The Public Key is invalid".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn missing_credentials_never_hit_the_network() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&server.uri());
        let mut unconfigured = request();
        unconfigured.public_key.clear();
        assert_eq!(relay.send(&unconfigured).await, Err(RelayError::NotConfigured));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let relay = EmailJsRelay::new("http://127.0.0.1:9");
        assert!(matches!(relay.send(&request()).await, Err(RelayError::Transport(_))));
    }
}
