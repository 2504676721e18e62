use std::fmt;

use crate::domain::value::StatusCode;

/// Parsed Nexmo response to a send attempt.
///
/// A single submitted SMS may be split by the provider into several parts,
/// each reported as one [`SmsResult`] with its own status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// Number of message parts the provider reports having handled.
    pub message_count: u32,
    /// Per-part results, in provider order.
    pub messages: Vec<SmsResult>,
}

impl SendSmsResponse {
    /// Whether every message part was accepted for delivery.
    ///
    /// A response with an empty `messages` array is not a success: nothing was
    /// accepted. Business-level failures are reported here rather than through
    /// the error channel, so check this (or the per-part statuses) after every
    /// send.
    pub fn success(&self) -> bool {
        !self.messages.is_empty() && self.messages.iter().all(|m| m.status.is_success())
    }
}

impl fmt::Display for SendSmsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{{ message_count: {}, success: {} }}",
            self.message_count,
            self.success()
        )?;
        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Outcome of one message part.
///
/// Everything beyond `status` is informational and provider-dependent; absent
/// fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsResult {
    /// Provider status code for this part.
    pub status: StatusCode,
    /// Provider-assigned id of this part.
    pub message_id: Option<String>,
    /// Client reference echoed back by the provider.
    pub client_ref: Option<String>,
    /// Account balance remaining after this part was sent.
    pub remaining_balance: Option<String>,
    /// Price charged for this part.
    pub message_price: Option<String>,
    /// Provider description of the error, if any.
    pub error_text: Option<String>,
}

impl fmt::Display for SmsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ status: {}, remaining_balance: {}, message_price: {} }}",
            self.status,
            self.remaining_balance.as_deref().unwrap_or("-"),
            self.message_price.as_deref().unwrap_or("-"),
        )
    }
}
