pub mod config;
pub mod dispatcher;
pub mod emailjs;

pub use config::EmailJsConfig;
pub use dispatcher::{
    ContactDispatcher, ContactError, ContactMessage, DeliveryError, EmailDelivery,
};
pub use emailjs::EmailJsDelivery;
