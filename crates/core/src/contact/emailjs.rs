//! # EmailJS Transport
//!
//! Production `EmailDelivery` impl targeting the EmailJS REST API. The
//! template parameters mirror the site's email template: sender name,
//! reply address, and body.

use async_trait::async_trait;
use serde_json::json;

use super::config::EmailJsConfig;
use super::dispatcher::{ContactMessage, DeliveryError, EmailDelivery};

const ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const SEND_TIMEOUT_SECS: u64 = 10;

/// Recipient name interpolated into the email template
const TO_NAME: &str = "Gaurav";

pub struct EmailJsDelivery {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsDelivery {
    pub fn new() -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()
            .map_err(|e| DeliveryError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: ENDPOINT.to_string(),
        })
    }

    /// Point at a different endpoint (tests, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl EmailDelivery for EmailJsDelivery {
    async fn send(
        &self,
        config: &EmailJsConfig,
        message: &ContactMessage,
    ) -> Result<(), DeliveryError> {
        let payload = json!({
            "service_id": config.service_id,
            "template_id": config.template_id,
            "user_id": config.public_key,
            "template_params": {
                "from_name": message.name,
                "from_email": message.email,
                "message": message.message,
                "to_name": TO_NAME,
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError(format!("provider returned {status}: {body}")));
        }

        Ok(())
    }
}
