//! Transifex API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Result, TransifexError};

const USER_AGENT: &str = concat!("transifex-api/", env!("CARGO_PKG_VERSION"));

/// Per-request options layered on top of the authenticated base request.
///
/// Every request gets basic auth and the project base URL; these fields
/// add the rest. Only one of `json` and `form` should be set.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// HTTP method (defaults to GET).
    pub method: Method,
    /// Query string parameters, serialized from a JSON object.
    pub query: Option<serde_json::Value>,
    /// JSON request body.
    pub json: Option<serde_json::Value>,
    /// Multipart form body.
    pub form: Option<Form>,
    /// Extra request headers.
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// Options for a bare request with the given method.
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }
}

/// Low-level Transifex API client, scoped to one project.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, `Create` and `Delete` traits on
/// model types, and translation content through free functions.
///
/// Clones share the same underlying connection pool but each carries its
/// own default resource slug.
///
/// # Example
///
/// ```no_run
/// use transifex_api::{ClientConfig, TransifexClient};
///
/// # fn example() -> transifex_api::Result<()> {
/// // Create from environment variables
/// let client = TransifexClient::from_env()?;
///
/// // Or configure manually
/// let config = ClientConfig::new("my-project", "user", "secret").with_resource_name("app");
/// let client = TransifexClient::new(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TransifexClient {
    http: Client,
    base_url: Arc<Url>,
    config: ClientConfig,
}

impl std::fmt::Debug for TransifexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransifexClient")
            .field("base_url", &self.base_url.as_str())
            .field("resource_name", &self.config.resource_name)
            .finish_non_exhaustive()
    }
}

impl TransifexClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransifexError::ConfigMissing`] if the project name, user or
    /// password is empty, and [`TransifexError::UrlError`] if the API URL is
    /// invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Self::project_url(config.api_url(), &config.project_name)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(TransifexError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            config,
        })
    }

    /// Build `<api_url>/project/<project_name>/`.
    fn project_url(api_url: &str, project_name: &str) -> Result<Url> {
        // Ensure base URL ends with /
        let api_url = if api_url.ends_with('/') {
            api_url.to_string()
        } else {
            format!("{api_url}/")
        };

        let root = Url::parse(&api_url)?;
        let project = urlencoding::encode(project_name);
        Ok(root.join(&format!("project/{project}/"))?)
    }

    /// Get the project base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configured project name.
    pub fn project_name(&self) -> &str {
        &self.config.project_name
    }

    /// Get the default resource slug, if one is set.
    pub fn resource_name(&self) -> Option<&str> {
        self.config.resource_name.as_deref()
    }

    /// Replace the default resource slug used by later calls.
    pub fn set_resource_name(&mut self, resource_name: impl Into<String>) {
        self.config.resource_name = Some(resource_name.into());
    }

    /// Pick the resource slug for a call.
    ///
    /// An explicit, non-empty slug always wins over the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`TransifexError::ConfigMissing`] when neither is available,
    /// and [`TransifexError::InvalidResourceSlug`] for `.` or `..`.
    pub fn resolve_resource(&self, explicit: Option<&str>) -> Result<String> {
        self.resolve_resource_or(explicit, None)
    }

    /// Like [`resolve_resource`](Self::resolve_resource), with a last-resort
    /// slug tried after the configured default.
    pub(crate) fn resolve_resource_or(
        &self,
        explicit: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<String> {
        let slug = explicit
            .filter(|s| !s.is_empty())
            .or(self.resource_name().filter(|s| !s.is_empty()))
            .or(fallback.filter(|s| !s.is_empty()))
            .ok_or_else(|| {
                TransifexError::ConfigMissing(
                    "no resource slug given and no default resource_name configured".to_string(),
                )
            })?;

        if is_dot_segment(slug) {
            return Err(TransifexError::InvalidResourceSlug(slug.to_string()));
        }
        Ok(slug.to_string())
    }

    /// Send a request relative to the project base URL.
    ///
    /// Basic auth is attached preemptively. Non-2xx responses are turned
    /// into errors.
    #[tracing::instrument(skip(self, options), fields(method = %options.method))]
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "sending request");

        let mut request = self
            .http
            .request(options.method, url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .headers(options.headers);

        if let Some(query) = options.query {
            request = request.query(&query);
        }
        if let Some(body) = options.json {
            request = request.json(&body);
        }
        if let Some(form) = options.form {
            request = request.multipart(form);
        }

        let response = request.send().await.map_err(TransifexError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request and return the body as text.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.send(path, RequestOptions::default()).await?;
        response.text().await.map_err(TransifexError::HttpError)
    }

    /// Make a GET request and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Make a GET request with query parameters and parse the body as JSON.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let options = RequestOptions {
            query: Some(serde_json::to_value(query)?),
            ..Default::default()
        };
        let response = self.send(path, options).await?;
        let body = response.text().await.map_err(TransifexError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Make a POST request with JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let options = RequestOptions {
            json: Some(serde_json::to_value(body)?),
            ..RequestOptions::method(Method::POST)
        };
        self.send(path, options).await
    }

    /// Make a PUT request with a multipart form body.
    pub async fn put_form(&self, path: &str, form: Form) -> Result<Response> {
        let options = RequestOptions {
            form: Some(form),
            ..RequestOptions::method(Method::PUT)
        };
        self.send(path, options).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.send(path, RequestOptions::method(Method::DELETE)).await
    }

    /// Read a response body as JSON, with an empty body as `Value::Null`.
    pub(crate) async fn json_or_null(response: Response) -> Result<serde_json::Value> {
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        tracing::warn!(status = status.as_u16(), %message, "request failed");
        Err(TransifexError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["message", "error", "detail"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        body
    }
}

/// Encode a single path segment (slug or language code).
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// `.` and `..` survive percent-encoding and are collapsed by URL joining.
pub(crate) fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}
