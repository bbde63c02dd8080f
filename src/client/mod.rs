//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod env;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{
    ApiKey, ApiResponse, CreatePhonebook, PhonebookId, RequestSenderId, SendAutoMessage,
    SendBulkMessage, SendMessage, SenderId, UpdatePhonebook, ValidationError,
};
use crate::transport::{Endpoint, with_api_key_query};

pub use env::{API_KEY_ENV, BASE_URL_ENV, SENDER_ID_ENV};

const DEFAULT_BASE_URL: &str = "https://api.ng.termii.com/api";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Patch => reqwest::Method::PATCH,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, request.url);
            if let Some(body) = request.body.as_ref() {
                // sets `Content-Type: application/json`
                builder = builder.json(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TermiiClient`].
///
/// Termii reports most failures through the HTTP status with a JSON body, so a rejected
/// request surfaces as [`TermiiError::Api`] carrying that body untouched. Nothing is retried.
pub enum TermiiError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Termii rejected the request: non-2xx status with a JSON body.
    #[error("request rejected with HTTP status {status}")]
    Api { status: u16, body: ApiResponse },

    /// Non-2xx status whose body is not JSON (proxies, gateways, outages).
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A successful response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL is not an absolute, hierarchical URL.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// A required environment variable is not set.
    #[error("missing environment variable {name}")]
    MissingEnv { name: &'static str },
}

#[derive(Debug, Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need a default sender id, a different base URL, a timeout, or a
/// custom user-agent.
pub struct TermiiClientBuilder {
    api_key: ApiKey,
    sender_id: Option<SenderId>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TermiiClientBuilder {
    /// Create a builder with the default base URL and no sender id/timeout/user-agent.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            sender_id: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Sender id used for messages that do not set `from` themselves.
    pub fn sender_id(mut self, sender_id: SenderId) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    /// Override the API base URL (default `https://api.ng.termii.com/api`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TermiiClient`].
    pub fn build(self) -> Result<TermiiClient, TermiiError> {
        let base_url = Url::parse(&self.base_url).map_err(|err| TermiiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source: Some(err),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TermiiError::InvalidBaseUrl {
                url: self.base_url,
                source: None,
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TermiiError::Transport(Box::new(err)))?;

        Ok(TermiiClient {
            api_key: self.api_key,
            sender_id: self.sender_id,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Termii client.
///
/// Every method issues exactly one HTTP request and returns the decoded JSON body as
/// [`ApiResponse`]. The API key is sent as the `api_key` query parameter for GET/DELETE
/// and as a JSON body field for POST/PATCH.
///
/// The client only holds immutable configuration, so clones can be shared freely across
/// tasks.
pub struct TermiiClient {
    api_key: ApiKey,
    sender_id: Option<SenderId>,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for TermiiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermiiClient")
            .field("api_key", &self.api_key)
            .field("sender_id", &self.sender_id)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TermiiClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TermiiClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, TermiiError> {
        TermiiClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TermiiClientBuilder {
        TermiiClientBuilder::new(api_key)
    }

    /// Build a client from `TERMII_API_KEY`, `TERMII_SENDER_ID` and `TERMII_BASE_URL`.
    ///
    /// Only the API key is required.
    pub fn from_env() -> Result<Self, TermiiError> {
        Self::builder_from_env()?.build()
    }

    /// Like [`TermiiClient::from_env`], but returns the builder for further tweaks.
    pub fn builder_from_env() -> Result<TermiiClientBuilder, TermiiError> {
        env::builder_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Default sender id, if one was configured.
    pub fn sender_id(&self) -> Option<&SenderId> {
        self.sender_id.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all sender ids registered for this API key (`GET /sender-id`).
    pub async fn list_sender_ids(&self) -> Result<ApiResponse, TermiiError> {
        self.query(HttpMethod::Get, Endpoint::SenderIds).await
    }

    /// Request a new sender id for the account (`POST /sender-id/request/`).
    pub async fn request_sender_id(
        &self,
        request: RequestSenderId,
    ) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_request_sender_id_body(&self.api_key, &request)?;
        self.json(HttpMethod::Post, Endpoint::RequestSenderId, body)
            .await
    }

    /// Send a message (`POST /sms/send/`).
    ///
    /// WhatsApp messages carry `media`; every other channel carries `sms`. When the request
    /// has no `from`, the client's default sender id is used (if any).
    ///
    /// Errors:
    /// - [`TermiiError::Api`] when Termii answers with a non-2xx JSON body,
    /// - [`TermiiError::HttpStatus`] for other non-2xx responses,
    /// - [`TermiiError::Transport`] / [`TermiiError::Parse`] for network or decoding failures.
    pub async fn send_message(&self, request: SendMessage) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_send_message_body(
            &self.api_key,
            self.sender_id.as_ref(),
            &request,
        )?;
        self.json(HttpMethod::Post, Endpoint::SendMessage, body)
            .await
    }

    /// Send one text to many numbers in a single call (`POST /sms/send/bulk`).
    pub async fn send_bulk_message(
        &self,
        request: SendBulkMessage,
    ) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_send_bulk_message_body(
            &self.api_key,
            self.sender_id.as_ref(),
            &request,
        )?;
        self.json(HttpMethod::Post, Endpoint::SendBulkMessage, body)
            .await
    }

    /// Send through an auto-generated Termii number (`POST /sms/number/send`).
    pub async fn send_auto_message(
        &self,
        request: SendAutoMessage,
    ) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_send_auto_message_body(&self.api_key, &request)?;
        self.json(HttpMethod::Post, Endpoint::SendAutoMessage, body)
            .await
    }

    /// List phonebooks (`GET /phonebooks`).
    pub async fn list_phonebooks(&self) -> Result<ApiResponse, TermiiError> {
        self.query(HttpMethod::Get, Endpoint::Phonebooks).await
    }

    /// Create a phonebook (`POST /phonebooks`).
    pub async fn create_phonebook(
        &self,
        request: CreatePhonebook,
    ) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_create_phonebook_body(&self.api_key, &request)?;
        self.json(HttpMethod::Post, Endpoint::Phonebooks, body)
            .await
    }

    /// Rename a phonebook or change its description (`PATCH /phonebooks/{id}`).
    pub async fn update_phonebook(
        &self,
        request: UpdatePhonebook,
    ) -> Result<ApiResponse, TermiiError> {
        let body = crate::transport::encode_update_phonebook_body(&self.api_key, &request)?;
        self.json(HttpMethod::Patch, Endpoint::Phonebook(request.id()), body)
            .await
    }

    /// Delete a phonebook (`DELETE /phonebooks/{id}`).
    pub async fn delete_phonebook(&self, id: PhonebookId) -> Result<ApiResponse, TermiiError> {
        self.query(HttpMethod::Delete, Endpoint::Phonebook(&id))
            .await
    }

    async fn query(
        &self,
        method: HttpMethod,
        endpoint: Endpoint<'_>,
    ) -> Result<ApiResponse, TermiiError> {
        let url = with_api_key_query(endpoint.url(&self.base_url), &self.api_key);
        self.execute(HttpRequest {
            method,
            url,
            body: None,
        })
        .await
    }

    async fn json(
        &self,
        method: HttpMethod,
        endpoint: Endpoint<'_>,
        body: Value,
    ) -> Result<ApiResponse, TermiiError> {
        self.execute(HttpRequest {
            method,
            url: endpoint.url(&self.base_url),
            body: Some(body),
        })
        .await
    }

    async fn execute(&self, request: HttpRequest) -> Result<ApiResponse, TermiiError> {
        let method = request.method;
        let url = redact_url(&request.url);
        log::debug!("[termii] >>> {} {}", method.as_str(), url);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(TermiiError::Transport)?;

        if !(200..=299).contains(&response.status) {
            log::warn!(
                "[termii] {} {} failed with HTTP status {}",
                method.as_str(),
                url,
                response.status
            );
            return Err(rejected(response));
        }

        log::debug!("[termii] <<< {} {}", response.status, url);
        crate::transport::decode_json_response(&response.body)
            .map_err(|err| TermiiError::Parse(Box::new(err)))
    }
}

fn rejected(response: HttpResponse) -> TermiiError {
    if response.body.trim().is_empty() {
        return TermiiError::HttpStatus {
            status: response.status,
            body: None,
        };
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => TermiiError::Api {
            status: response.status,
            body: ApiResponse::new(value),
        },
        Err(_) => TermiiError::HttpStatus {
            status: response.status,
            body: Some(response.body),
        },
    }
}

fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == ApiKey::FIELD {
                "[REDACTED]".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
