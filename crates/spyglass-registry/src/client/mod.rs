//! HTTP client implementation with connection pooling and retry logic

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response, StatusCode};
use tracing::debug;
use url::Url;

use spyglass_core::error::ExplorerError;

use crate::api::{Packument, SearchResponse};
use crate::limit::{RequestThrottle, ThrottleConfig};
use crate::retry::RetryPolicy;
use crate::RegistryResult;


/// Public npm registry endpoint
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the registry HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Registry origin, e.g. `https://registry.npmjs.org`
    pub base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Retry policy shared by all request paths
    pub retry: RetryPolicy,
    /// Optional local request throttle
    pub throttle: Option<ThrottleConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
            throttle: None,
        }
    }
}

/// Main HTTP client for registry catalog queries
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Pooled reqwest client reused across requests
    client: Client,
    /// Retry policy shared by all request paths
    retry: RetryPolicy,
    /// Optional local request throttle
    throttle: Option<Arc<RequestThrottle>>,
    /// Normalized origin with no trailing slash
    base_url: String,
}

impl RegistryClient {
    /// Create a client against the public registry with defaults
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> RegistryResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ExplorerError::invalid_input(format!(
                "Invalid registry URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let client = ClientBuilder::new()
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(config.request_timeout)
            .gzip(true)
            .user_agent(concat!("spyglass/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::network("Failed to create HTTP client".to_string(), e))?;

        Ok(Self {
            client,
            retry: config.retry,
            throttle: config.throttle.map(|throttle| Arc::new(RequestThrottle::new(throttle))),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Registry this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full metadata document for one package, with retry
    pub async fn fetch_packument(&self, package_name: &str) -> RegistryResult<Packument> {
        let encoded_name = self.encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        self.retry
            .run(|| async {
                let response = self.get(&url, &[]).await?;

                match response.status() {
                    StatusCode::OK => {
                        response.json::<Packument>().await.map_err(|e| {
                            ExplorerError::network(
                                format!("Failed to parse metadata for '{}'", package_name),
                                e,
                            )
                        })
                    }
                    StatusCode::NOT_FOUND => Err(ExplorerError::PackageNotFound {
                        name: package_name.to_string(),
                    }),
                    _ => Err(self.response_error(response).await),
                }
            })
            .await
    }

    /// Run a full-text search against the registry, with retry.
    ///
    /// `size` caps the number of hits the registry returns.
    pub async fn fetch_search(&self, term: &str, size: usize) -> RegistryResult<SearchResponse> {
        let url = format!("{}/-/v1/search", self.base_url);
        let size = size.to_string();

        self.retry
            .run(|| async {
                let response = self
                    .get(&url, &[("text", term), ("size", size.as_str())])
                    .await?;

                match response.status() {
                    StatusCode::OK => {
                        response.json::<SearchResponse>().await.map_err(|e| {
                            ExplorerError::network(
                                "Failed to parse search response".to_string(),
                                e,
                            )
                        })
                    }
                    _ => Err(self.response_error(response).await),
                }
            })
            .await
    }

    /// One GET attempt: throttle gate, then the request itself.
    ///
    /// A throttle denial comes back as a rate-limit error carrying the
    /// window's reopening time, so the retry policy handles it the same
    /// way as a server-sent 429.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> RegistryResult<Response> {
        if let Some(throttle) = &self.throttle {
            if let Err(wait) = throttle.acquire() {
                debug!("Local throttle window full, reopens in {:?}", wait);
                return Err(ExplorerError::RateLimited {
                    retry_after: Some(wait),
                });
            }
        }

        debug!("Requesting registry document: {}", url);
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                ExplorerError::Timeout {
                    message: format!("Request to {} timed out", url),
                }
            } else {
                ExplorerError::network(format!("Request to {} failed", url), e)
            }
        })
    }

    /// Map a non-success response into the error taxonomy
    async fn response_error(&self, response: Response) -> ExplorerError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            return ExplorerError::RateLimited { retry_after };
        }

        let body = response.text().await.unwrap_or_default();
        ExplorerError::Http {
            status: status.as_u16(),
            body,
        }
    }

    /// Path-encode a package name; scoped names escape their slash
    fn encode_package_name(&self, name: &str) -> String {
        if name.starts_with('@') {
            // @org/pkg travels as @org%2fpkg
            name.replace('/', "%2f")
        } else {
            name.to_string()
        }
    }
}
