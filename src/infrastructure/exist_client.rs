//! Exist.io API client

use crate::domain::{AttributeUpdate, ValueType};
use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Default base URL of the Exist API
pub const DEFAULT_API_URL: &str = "https://exist.io/api/2";

/// Most updates Exist accepts in a single request
pub const MAX_UPDATES_PER_REQUEST: usize = 36;

pub const ACQUIRE_ENDPOINT: &str = "attributes/acquire/";
pub const CREATE_ENDPOINT: &str = "attributes/create/";
pub const UPDATE_ENDPOINT: &str = "attributes/update/";

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body decoded as JSON, or the raw text when it isn't JSON
    pub fn decoded_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

/// Sends JSON bodies to Exist endpoints.
///
/// Network failures are errors; any HTTP status is a response.
pub trait Transport {
    fn post_json(&self, endpoint: &str, token: &str, body: String) -> Result<ApiResponse>;
}

/// Blocking reqwest transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HttpTransport {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL from `EXIST_API_URL`, falling back to the public API
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("EXIST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, endpoint: &str, token: &str, body: String) -> Result<ApiResponse> {
        let url = self.url_for(endpoint);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}

/// The three attribute operations the importer needs from Exist.
///
/// Rejected requests are logged, not returned as errors.
pub trait AttributeApi {
    /// Start tracking a template attribute
    fn acquire_attribute(&self, template: &str) -> Result<()>;

    /// Define a new custom attribute
    fn create_attribute(
        &self,
        label: &str,
        value_type: ValueType,
        group: &str,
        manual: bool,
    ) -> Result<()>;

    /// Write date/value updates, split into requests Exist will accept
    fn update_attributes(&self, updates: &[AttributeUpdate]) -> Result<()>;
}

impl<A: AttributeApi + ?Sized> AttributeApi for &A {
    fn acquire_attribute(&self, template: &str) -> Result<()> {
        (**self).acquire_attribute(template)
    }

    fn create_attribute(
        &self,
        label: &str,
        value_type: ValueType,
        group: &str,
        manual: bool,
    ) -> Result<()> {
        (**self).create_attribute(label, value_type, group, manual)
    }

    fn update_attributes(&self, updates: &[AttributeUpdate]) -> Result<()> {
        (**self).update_attributes(updates)
    }
}

#[derive(Serialize)]
struct AcquireRequest<'a> {
    template: &'a str,
    manual: bool,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    label: &'a str,
    value_type: ValueType,
    group: &'a str,
    manual: bool,
}

/// Exist client authenticated with a developer access token
pub struct ExistClient<T: Transport = HttpTransport> {
    transport: T,
    token: String,
}

impl<T: Transport> ExistClient<T> {
    pub fn new(transport: T, token: impl Into<String>) -> Self {
        ExistClient {
            transport,
            token: token.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        let body = serde_json::to_string(body)?;
        self.transport.post_json(endpoint, &self.token, body)
    }
}

impl<T: Transport> AttributeApi for ExistClient<T> {
    fn acquire_attribute(&self, template: &str) -> Result<()> {
        let response = self.post(
            ACQUIRE_ENDPOINT,
            &[AcquireRequest {
                template,
                manual: false,
            }],
        )?;

        if response.is_success() {
            info!(template, "Acquired successfully");
        } else {
            error!(
                template,
                status = response.status,
                "Error: {}",
                response.decoded_body()
            );
        }
        Ok(())
    }

    fn create_attribute(
        &self,
        label: &str,
        value_type: ValueType,
        group: &str,
        manual: bool,
    ) -> Result<()> {
        let response = self.post(
            CREATE_ENDPOINT,
            &[CreateRequest {
                label,
                value_type,
                group,
                manual,
            }],
        )?;

        if response.is_success() {
            let created = response
                .decoded_body()
                .get("success")
                .and_then(|s| s.get(0))
                .cloned()
                .unwrap_or(Value::Null);
            let pretty = serde_json::to_string_pretty(&created)?;
            info!(label, "Created successfully:\n{}", pretty);
        } else {
            error!(
                label,
                status = response.status,
                "Error: {}",
                response.decoded_body()
            );
        }
        Ok(())
    }

    fn update_attributes(&self, updates: &[AttributeUpdate]) -> Result<()> {
        let total = updates.len().div_ceil(MAX_UPDATES_PER_REQUEST);
        let mut accepted = 0;

        for (index, chunk) in updates.chunks(MAX_UPDATES_PER_REQUEST).enumerate() {
            let response = self.post(UPDATE_ENDPOINT, chunk)?;

            if response.is_success() {
                accepted += 1;
                info!(chunk = index + 1, total, size = chunk.len(), "Updated successfully");
            } else {
                error!(
                    chunk = index + 1,
                    total,
                    status = response.status,
                    "Error: {}",
                    response.decoded_body()
                );
            }
        }

        if accepted < total {
            warn!(accepted, total, "Some update requests were rejected");
        } else if total > 0 {
            info!(requests = total, updates = updates.len(), "All updates sent");
        }
        Ok(())
    }
}
