//! # Contact Dispatch
//!
//! Collects contact-form fields and forwards them to the external email
//! collaborator. The dispatcher owns two rules the views rely on: credentials
//! are checked before any network call, and only one send may be in flight
//! at a time; the slot reopens when the send settles, success or failure.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Semaphore;

use super::config::EmailJsConfig;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A submitted contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender display name
    pub name: String,
    /// Sender reply address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Reject blank fields and malformed reply addresses
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::InvalidField {
                field: "name",
                reason: "must not be blank",
            });
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::InvalidField {
                field: "email",
                reason: "must not be blank",
            });
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidField {
                field: "email",
                reason: "is not a valid email address",
            });
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::InvalidField {
                field: "message",
                reason: "must not be blank",
            });
        }
        Ok(())
    }
}

/// Failure reported by the delivery collaborator
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DeliveryError(pub String);

/// Contact dispatch failures
#[derive(Debug, Error)]
pub enum ContactError {
    /// Credentials absent; no send was attempted
    #[error("contact delivery is not configured (missing {0})")]
    NotConfigured(String),

    /// A form field failed validation
    #[error("{field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// A send is already outstanding; the caller should wait for it to settle
    #[error("a message is already being sent")]
    SendInProgress,

    /// The collaborator failed; the caller may retry with the same fields
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl ContactError {
    /// Whether retrying the same submission can succeed without operator
    /// intervention
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SendInProgress | Self::Delivery(_))
    }
}

/// The external email collaborator boundary. The core defines only this
/// contract; transports and test doubles live behind it.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(
        &self,
        config: &EmailJsConfig,
        message: &ContactMessage,
    ) -> Result<(), DeliveryError>;
}

/// Forwards contact messages to the delivery collaborator
pub struct ContactDispatcher {
    config: Option<EmailJsConfig>,
    delivery: Arc<dyn EmailDelivery>,
    in_flight: Semaphore,
}

impl ContactDispatcher {
    pub fn new(config: Option<EmailJsConfig>, delivery: Arc<dyn EmailDelivery>) -> Self {
        Self {
            config,
            delivery,
            in_flight: Semaphore::new(1),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Validate and forward one message.
    ///
    /// Configuration and field checks run before the in-flight slot is
    /// taken; the slot is held across the send and released when it
    /// settles either way.
    pub async fn dispatch(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| ContactError::NotConfigured("delivery credentials".to_string()))?;
        message.validate()?;

        let _permit = self
            .in_flight
            .try_acquire()
            .map_err(|_| ContactError::SendInProgress)?;

        match self.delivery.send(config, message).await {
            Ok(()) => {
                tracing::info!(from = %message.email, "contact message delivered");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact delivery failed");
                Err(ContactError::Delivery(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "key_test".to_string(),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Hello there")
    }

    /// Counts calls; succeeds or fails according to `fail`
    struct RecordingDelivery {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingDelivery {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl EmailDelivery for RecordingDelivery {
        async fn send(
            &self,
            _config: &EmailJsConfig,
            _message: &ContactMessage,
        ) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DeliveryError("provider exploded".to_string()))
            } else {
                Ok(())
            }
        }
    }

    /// Parks until released, so a send can be held in flight
    struct BlockedDelivery {
        release: Notify,
    }

    #[async_trait]
    impl EmailDelivery for BlockedDelivery {
        async fn send(
            &self,
            _config: &EmailJsConfig,
            _message: &ContactMessage,
        ) -> Result<(), DeliveryError> {
            self.release.notified().await;
            Ok(())
        }
    }

    #[test]
    fn test_missing_config_rejected_before_delivery() {
        tokio_test::block_on(async {
            let delivery = RecordingDelivery::new(false);
            let dispatcher = ContactDispatcher::new(None, delivery.clone());

            let err = dispatcher.dispatch(&message()).await.unwrap_err();
            assert!(matches!(err, ContactError::NotConfigured(_)));
            assert!(!err.is_retryable());
            assert_eq!(delivery.calls.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_invalid_fields_rejected_before_delivery() {
        tokio_test::block_on(async {
            let delivery = RecordingDelivery::new(false);
            let dispatcher = ContactDispatcher::new(Some(config()), delivery.clone());

            let blank = ContactMessage::new("", "ada@example.com", "hi");
            assert!(matches!(
                dispatcher.dispatch(&blank).await.unwrap_err(),
                ContactError::InvalidField { field: "name", .. }
            ));

            let bad_email = ContactMessage::new("Ada", "not-an-address", "hi");
            assert!(matches!(
                dispatcher.dispatch(&bad_email).await.unwrap_err(),
                ContactError::InvalidField { field: "email", .. }
            ));

            assert_eq!(delivery.calls.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_failed_delivery_surfaces_and_reenables() {
        tokio_test::block_on(async {
            let delivery = RecordingDelivery::new(true);
            let dispatcher = ContactDispatcher::new(Some(config()), delivery.clone());

            let err = dispatcher.dispatch(&message()).await.unwrap_err();
            assert!(matches!(err, ContactError::Delivery(_)));
            assert!(err.is_retryable());

            // The slot reopened: a retry reaches the collaborator again
            let err = dispatcher.dispatch(&message()).await.unwrap_err();
            assert!(matches!(err, ContactError::Delivery(_)));
            assert_eq!(delivery.calls.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_second_send_rejected_while_first_in_flight() {
        tokio_test::block_on(async {
            let delivery = Arc::new(BlockedDelivery {
                release: Notify::new(),
            });
            let dispatcher =
                Arc::new(ContactDispatcher::new(Some(config()), delivery.clone()));

            let first = {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move { dispatcher.dispatch(&message()).await })
            };

            // Let the first send reach the collaborator and park there
            for _ in 0..10 {
                tokio::task::yield_now().await;
            }

            let err = dispatcher.dispatch(&message()).await.unwrap_err();
            assert!(matches!(err, ContactError::SendInProgress));

            delivery.release.notify_one();
            first.await.unwrap().unwrap();

            // Settled, so the slot is free again
            delivery.release.notify_one();
            dispatcher.dispatch(&message()).await.unwrap();
        });
    }

    #[test]
    fn test_success_after_settle() {
        tokio_test::block_on(async {
            let delivery = RecordingDelivery::new(false);
            let dispatcher = ContactDispatcher::new(Some(config()), delivery.clone());
            dispatcher.dispatch(&message()).await.unwrap();
            dispatcher.dispatch(&message()).await.unwrap();
            assert_eq!(delivery.calls.load(Ordering::SeqCst), 2);
        });
    }
}
