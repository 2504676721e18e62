//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{Password, SendSmsResponse, SmsMessage, Username};

const DEFAULT_ENDPOINT: &str = "https://rest.nexmo.com/sms/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: fmt::Debug + Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // `form` sets Content-Type and Content-Length from the encoded
            // UTF-8 bytes and preserves pair order.
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone)]
/// API credentials for Nexmo.
///
/// Username and password are write-only: they can be set and replaced, but
/// nothing outside the crate can read them back, and `Debug` output redacts
/// them. Values are not validated here; the provider reports bad credentials
/// as status code 4.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create credentials from a username/password pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Username::new(username),
            password: Password::new(password),
        }
    }

    /// Replace the username.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Username::new(username);
    }

    /// Replace the password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Password::new(password);
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.expose().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.expose().to_owned()));
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`].
///
/// Only transport- and parse-level failures use this channel. A response in
/// which the provider rejected one or more message parts is returned as a
/// normal [`SendSmsResponse`] with `success() == false`.
pub enum NexmoError {
    /// The request could not be sent or no response was received
    /// (DNS, connection refused, timeout, TLS failure).
    #[error("could not reach provider")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A response was received but was not the expected JSON shape.
    #[error("could not parse provider response")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct NexmoClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NexmoClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint URL requests are posted to.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Timeouts and cancellation belong to the transport; the send operation
    /// propagates them as [`NexmoError::Transport`] without reinterpretation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NexmoClient`].
    ///
    /// Fails with [`NexmoError::BaseUrl`] if the configured endpoint is not an
    /// absolute URL.
    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let endpoint = Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        Ok(NexmoClient {
            credentials: self.credentials,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug, Clone)]
/// Client for the Nexmo SMS REST API.
///
/// Holds the endpoint and credentials so they do not have to be fed to every
/// send; construct it once and reuse it across sends. Request bodies are
/// always `application/x-www-form-urlencoded` over UTF-8; the encoding is
/// fixed at construction.
///
/// Concurrent sends through a shared client are safe: each call copies its
/// message and only reads the client's fields.
pub struct NexmoClient {
    credentials: Credentials,
    endpoint: Url,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client posting to the default endpoint
    /// (`https://rest.nexmo.com/sms/json`).
    ///
    /// For more customization, use [`NexmoClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: default_endpoint(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NexmoClientBuilder {
        NexmoClientBuilder::new(credentials)
    }

    /// The endpoint URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Point the client at a different endpoint.
    pub fn set_endpoint(&mut self, endpoint: Url) {
        self.endpoint = endpoint;
    }

    /// Replace the credentials used for subsequent sends.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Submit one SMS message.
    ///
    /// The draft is copied before anything else happens, so the caller may
    /// mutate or reuse it immediately. The provider may split the message into
    /// several parts; inspect [`SendSmsResponse::success`] or the per-part
    /// statuses for the outcome — provider-side rejections are data, not
    /// errors.
    ///
    /// Errors:
    /// - [`NexmoError::Transport`] when the provider could not be reached,
    /// - [`NexmoError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NexmoError::Parse`] when the body is not the expected JSON.
    ///
    /// No retries are performed; every error is local to this one call.
    pub async fn send_sms(&self, message: &SmsMessage) -> Result<SendSmsResponse, NexmoError> {
        let snapshot = message.snapshot();

        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(&snapshot));

        let response = self
            .http
            .post_form(self.endpoint.as_str(), params)
            .await
            .map_err(NexmoError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(NexmoError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| NexmoError::Parse(Box::new(err)))?;

        Ok(parsed)
    }
}

fn default_endpoint() -> Url {
    // The constant is a valid absolute URL; parsing it cannot fail.
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}
