//! EasyBroker client
//!
//! Drives the page-by-page fetch: each page goes through a bounded retry
//! loop, items are extracted from the response envelope, and the aggregate
//! preserves page order then within-page order.

use crate::config::ClientConfig;
use crate::decode::{parse_envelope, Envelope};
use crate::error::{Error, Result};
use crate::retry::{classify, wait_duration, Disposition, RetryState, Sleeper, TokioSleeper};
use crate::transport::{HttpTransport, PageRequest, Transport};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the API key (the provider's custom auth scheme)
const AUTH_HEADER: &str = "x-authorization";

/// Placeholder printed when a property has no usable title
const NO_TITLE: &str = "(sin título)";

/// Property fields consulted for a display title, in priority order
const TITLE_KEYS: [&str; 4] = ["title", "name", "public_id", "id"];

/// Client for the EasyBroker properties API
pub struct EasyBrokerClient {
    config: ClientConfig,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
}

impl EasyBrokerClient {
    /// Create a client with the default HTTP transport and a real sleep
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let headers = build_headers(&config.api_key)?;

        Ok(Self {
            config,
            headers,
            transport,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the sleep capability used between retry attempts
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Fetch every property, page by page
    ///
    /// Items keep page order, then within-page order. Any failure aborts
    /// the whole fetch; nothing collected so far is returned. A full last
    /// page costs one extra request that must come back empty.
    pub async fn fetch_all_properties(&self) -> Result<Vec<Value>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let envelope = self.fetch_page_with_retries(page).await?;
            let items = envelope.into_items();

            if items.is_empty() {
                break;
            }

            let count = items.len();
            all.extend(items);
            debug!("page {page}: {count} items, {} total", all.len());

            if count < self.config.page_size as usize {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    /// Fetch everything and print one title per line
    pub async fn print_titles(&self) -> Result<()> {
        for property in self.fetch_all_properties().await? {
            println!("{}", display_title(&property));
        }
        Ok(())
    }

    /// Fetch one page through the bounded retry loop
    ///
    /// Retryable responses (429, 5xx) are reattempted up to `max_retries`
    /// times with exponential backoff; everything else fails immediately,
    /// as do transport-level errors.
    async fn fetch_page_with_retries(&self, page: u32) -> Result<Envelope> {
        let mut retry = RetryState::new(self.config.max_retries);

        loop {
            let request = self.page_request(page);
            let response = self.transport.send(&request).await?;

            match classify(&response) {
                Disposition::Success => return parse_envelope(&response.body),

                Disposition::Retry {
                    status,
                    reason,
                    retry_after,
                } => {
                    let backoff = wait_duration(self.config.backoff_factor, retry.attempt());
                    let reason = describe_retryable(status, &reason, retry_after, backoff);

                    if !retry.can_retry() {
                        return Err(Error::retries_exhausted(self.config.max_retries, reason));
                    }

                    warn!(
                        "page {page}: {reason}, attempt {}/{}, retrying in {}s",
                        retry.attempt(),
                        self.config.max_retries + 1,
                        backoff.as_secs_f64()
                    );
                    self.sleeper.sleep(backoff).await;
                    retry.next_attempt();
                }

                Disposition::Fatal { status, body } => {
                    return Err(Error::http_status(status, body));
                }
            }
        }
    }

    /// Build the request for one page attempt
    fn page_request(&self, page: u32) -> PageRequest {
        let url = format!(
            "{}/properties?page={page}&limit={}",
            self.config.normalized_base_url(),
            self.config.page_size
        );

        PageRequest {
            page,
            limit: self.config.page_size,
            url,
            headers: self.headers.clone(),
        }
    }
}

impl std::fmt::Debug for EasyBrokerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasyBrokerClient")
            .field("base_url", &self.config.base_url)
            .field("page_size", &self.config.page_size)
            .field("max_retries", &self.config.max_retries)
            .finish_non_exhaustive()
    }
}

/// Build the fixed headers sent with every page request
fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let value = HeaderValue::from_str(api_key)
        .map_err(|_| Error::config("api_key contains characters not allowed in a header"))?;
    headers.insert(AUTH_HEADER, value);

    Ok(headers)
}

/// Failure reason recorded for a retryable response
///
/// For 429s the message names the wait the server advertised via a
/// digit-only `Retry-After`, falling back to the computed backoff. That
/// wait is diagnostic only: the sleep between attempts always uses the
/// computed backoff.
fn describe_retryable(
    status: u16,
    reason: &str,
    retry_after: Option<u64>,
    backoff: Duration,
) -> String {
    if status == 429 {
        match retry_after {
            Some(secs) => format!("{reason} (wait {secs}s)"),
            None => format!("{reason} (wait {}s)", backoff.as_secs_f64()),
        }
    } else {
        reason.to_string()
    }
}

/// Human-readable title for a property
///
/// Falls back through `title`, `name`, `public_id`, `id`; non-string
/// values are rendered with their JSON representation.
pub fn display_title(property: &Value) -> String {
    for key in TITLE_KEYS {
        match property.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    NO_TITLE.to_string()
}
