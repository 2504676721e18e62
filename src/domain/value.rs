use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo API username (`username`).
///
/// Write-only outside the crate: there is no public accessor and `Debug`
/// redacts the value, so the credential cannot leak through logging or
/// formatting of the types that hold it. No validation is performed; invalid
/// credentials surface as provider status code 4 after a send attempt.
pub struct Username(String);

impl Username {
    /// Form field name used by Nexmo (`username`).
    pub const FIELD: &'static str = "username";

    /// Wrap an API username. The value is taken as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Username(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo API password (`password`).
///
/// Write-only outside the crate, same as [`Username`].
pub struct Password(String);

impl Password {
    /// Form field name used by Nexmo (`password`).
    pub const FIELD: &'static str = "password";

    /// Wrap an API password. The value is taken as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Nexmo per-message status code.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Nexmo.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this code means the message part was accepted for delivery.
    pub fn is_success(self) -> bool {
        self.known() == Some(KnownStatusCode::Success)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(kind) => write!(f, "{} ({kind:?})", self.0),
            None => write!(f, "{} (unknown)", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Nexmo status codes.
///
/// This is the provider's documented table (codes 0 through 16, with 13 and 14
/// unassigned). Codes outside the table are preserved as [`StatusCode`] and
/// return `None` from [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    /// The message was accepted for delivery.
    Success,
    /// Submission capacity exceeded; back off and retry.
    Throttled,
    /// The request is missing mandatory parameters.
    MissingParams,
    /// One or more parameter values are invalid.
    InvalidParams,
    /// The supplied username/password is invalid or disabled.
    InvalidCredentials,
    /// Internal error in the provider platform.
    InternalError,
    /// The provider could not process the message (e.g. unrecognized number prefix).
    InvalidMessage,
    /// The destination number is blacklisted.
    NumberBarred,
    /// The sending account has been barred from submitting messages.
    PartnerAccountBarred,
    /// Insufficient prepaid balance.
    PartnerQuotaExceeded,
    /// Too many simultaneous connections for this account.
    TooManyExistingBinds,
    /// The account is not provisioned for REST submission.
    AccountNotEnabledForRest,
    /// Combined UDH and message body exceed 140 octets.
    MessageTooLong,
    /// The sender address (`from`) was not allowed for this message.
    InvalidSenderAddress,
    /// The `ttl` parameter value is invalid.
    InvalidTtl,
}

impl KnownStatusCode {
    /// Convert a raw Nexmo integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParams,
            3 => Self::InvalidParams,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaExceeded,
            10 => Self::TooManyExistingBinds,
            11 => Self::AccountNotEnabledForRest,
            12 => Self::MessageTooLong,
            15 => Self::InvalidSenderAddress,
            16 => Self::InvalidTtl,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::InternalError | Self::TooManyExistingBinds
        )
    }

    /// Whether this status indicates invalid or barred credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::PartnerAccountBarred)
    }
}
