//! Typed Rust client for the Nexmo SMS REST API.
//!
//! The crate does one thing: submit an SMS through the provider's
//! form-encoded `sms/json` endpoint and interpret the JSON response. The
//! design is layered: a domain layer of plain value types, a transport layer
//! for wire-format details, and a small client layer orchestrating one
//! request/response per send.
//!
//! Provider-side rejections (throttling, bad credentials, barred numbers) are
//! not errors: they come back as status codes inside the
//! [`SendSmsResponse`], with [`SendSmsResponse::success`] aggregating them.
//! The error channel is reserved for not reaching the provider or not
//! understanding its response.
//!
//! ```rust,no_run
//! use nexmo_sms::{Credentials, NexmoClient, SmsMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo_sms::NexmoError> {
//!     let client = NexmoClient::new(Credentials::new("api-user", "api-password"));
//!     let message = SmsMessage::new("Acme", "447700900000", "hello");
//!     let response = client.send_sms(&message).await?;
//!     if !response.success() {
//!         eprintln!("provider rejected the message:\n{response}");
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, NexmoClient, NexmoClientBuilder, NexmoError};
pub use domain::{
    KnownStatusCode, Password, SendSmsResponse, SmsMessage, SmsResult, StatusCode, Username,
};
