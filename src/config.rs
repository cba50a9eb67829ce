//! Client configuration.

use std::env;

use crate::error::{Result, TransifexError};

/// Default root of the Transifex v2 API.
pub const DEFAULT_API_URL: &str = "https://www.transifex.com/api/2/";

/// Connection settings for a [`TransifexClient`](crate::TransifexClient).
///
/// A client is always scoped to a single project. `resource_name` is the
/// slug used by resource operations when no explicit slug is passed.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// The project slug embedded in every request URL.
    pub project_name: String,
    /// Username for HTTP basic auth.
    pub user: String,
    /// Password (or API token) for HTTP basic auth.
    pub password: String,
    /// Default resource slug.
    pub resource_name: Option<String>,
    /// API root. Defaults to [`DEFAULT_API_URL`].
    pub api_url: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_name", &self.project_name)
            .field("user", &self.user)
            .field("resource_name", &self.resource_name)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Create a config with the three required fields.
    pub fn new(
        project_name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            user: user.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Set the default resource slug.
    #[must_use]
    pub fn with_resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    /// Point the client at a different API root (e.g. a mock server).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `TRANSIFEX_PROJECT`, `TRANSIFEX_USER` and `TRANSIFEX_PASSWORD`
    /// (required) plus `TRANSIFEX_RESOURCE` and `TRANSIFEX_API_URL`
    /// (optional).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name).map_err(|_| {
                TransifexError::ConfigMissing(format!("{name} environment variable not set"))
            })
        };

        let config = Self {
            project_name: required("TRANSIFEX_PROJECT")?,
            user: required("TRANSIFEX_USER")?,
            password: required("TRANSIFEX_PASSWORD")?,
            resource_name: env::var("TRANSIFEX_RESOURCE").ok().filter(|s| !s.is_empty()),
            api_url: env::var("TRANSIFEX_API_URL").ok().filter(|s| !s.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`TransifexError::ConfigMissing`] naming the first empty
    /// field, checked in the order `project_name`, `user`, `password`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("project_name", &self.project_name),
            ("user", &self.user),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(TransifexError::ConfigMissing(format!(
                    "no {field} option provided"
                )));
            }
        }
        Ok(())
    }

    /// The configured API root, or the default.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
