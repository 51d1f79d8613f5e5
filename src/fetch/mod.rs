//! Seed page retrieval.
//!
//! A `PageSource` turns a seed URL into markup. Two sources exist, selected
//! once per run by `RenderMode`:
//! - `HttpPageSource`: a single GET, success status required
//! - `BrowserPageSource`: a headless browser session that lets page scripts
//!   run for a settle period before the DOM is captured

mod browser;
mod request;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::{Config, RenderMode};
use crate::error_handling::{ExtractionError, RetrievalError};
use request::RequestHeaders;

pub use browser::{BrowserPageSource, BrowserSession};

/// Retrieves the markup of one page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the page markup, or the reason it could not be retrieved.
    async fn retrieve(&self, url: &Url) -> Result<String, ExtractionError>;
}

/// Plain HTTP retrieval.
pub struct HttpPageSource {
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl HttpPageSource {
    /// Creates a source using the shared client.
    ///
    /// `timeout` bounds the whole exchange, body included; the client's own
    /// timeout still applies to each request.
    pub fn new(client: Arc<reqwest::Client>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn get(&self, url: &Url) -> Result<String, RetrievalError> {
        let request = RequestHeaders::apply_to_request_builder(self.client.get(url.clone()));
        let response = request
            .send()
            .await
            .map_err(|source| RetrievalError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| RetrievalError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn retrieve(&self, url: &Url) -> Result<String, ExtractionError> {
        match tokio::time::timeout(self.timeout, self.get(url)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(RetrievalError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
            .into()),
        }
    }
}

/// Builds the page source for the configured render mode.
pub fn page_source_for(config: &Config, client: Arc<reqwest::Client>) -> Arc<dyn PageSource> {
    match config.render_mode {
        RenderMode::Static => Arc::new(HttpPageSource::new(client, config.request_timeout())),
        RenderMode::Rendered => Arc::new(BrowserPageSource::new(
            config.browser.clone(),
            config.settle_period(),
            config.render_timeout(),
        )),
    }
}
