/// Draft of an SMS message to submit to Nexmo.
///
/// This is a plain mutable record: fill in the fields (or use
/// [`SmsMessage::new`]) and hand it to
/// [`NexmoClient::send_sms`](crate::NexmoClient::send_sms). None of the fields
/// are validated here; the provider validates them and reports problems
/// through per-message status codes.
///
/// The send operation copies the draft before doing anything else, so reusing
/// or editing it afterwards never affects a request that is already under way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsMessage {
    /// Number or text the message originates from.
    pub from: String,
    /// Destination phone number.
    pub to: String,
    /// Message body.
    pub text: String,
}

impl SmsMessage {
    /// Build a draft from its three fields.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
        }
    }

    /// Field-by-field copy taken at send entry. Everything after this point
    /// reads from the copy, never from the caller's draft.
    pub(crate) fn snapshot(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            text: self.text.clone(),
        }
    }
}
