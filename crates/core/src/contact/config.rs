//! # Delivery Configuration
//!
//! Credentials for the external email collaborator, supplied out-of-band
//! through the environment. Presence is checked up front so a misconfigured
//! deployment fails with a configuration error instead of a doomed network
//! call.

use super::dispatcher::ContactError;

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

/// EmailJS credentials: service, template, and the account public key
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Read all three values from the environment.
    ///
    /// Any missing or empty variable is a configuration error naming the
    /// offenders, distinct from a delivery failure.
    pub fn from_env() -> Result<Self, ContactError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let service_id = read(ENV_SERVICE_ID);
        let template_id = read(ENV_TEMPLATE_ID);
        let public_key = read(ENV_PUBLIC_KEY);

        if !missing.is_empty() {
            return Err(ContactError::NotConfigured(missing.join(", ")));
        }

        Ok(Self {
            service_id,
            template_id,
            public_key,
        })
    }
}
