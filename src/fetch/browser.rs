//! Headless browser rendering.
//!
//! Each rendered retrieval owns one browser process. The process is started
//! with a virtual time budget equal to the settle period, so page scripts get
//! that long to run before the browser prints the resulting DOM on stdout.
//! The session is torn down when `BrowserSession` is dropped, whichever way
//! the retrieval ends.
//!
//! The budget is virtual time: timers and animation frames are fast-forwarded,
//! but the browser does not wait on the wall clock. Content fetched by scripts
//! over slow real-time network requests may still be missing from the capture.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use url::Url;

use super::PageSource;
use crate::error_handling::{ExtractionError, RenderError};

/// A running headless browser bound to a single page.
pub struct BrowserSession {
    child: Child,
    url: String,
}

impl BrowserSession {
    /// Starts `browser` on `url`, allowing `settle` for page scripts.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Launch` if the executable cannot be started.
    pub fn launch(browser: &Path, url: &Url, settle: Duration) -> Result<Self, RenderError> {
        let child = Command::new(browser)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--mute-audio")
            .arg(format!("--virtual-time-budget={}", settle.as_millis()))
            .arg("--dump-dom")
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderError::Launch {
                browser: browser.display().to_string(),
                source,
            })?;

        log::debug!("Browser session started for {}", url);
        Ok(Self {
            child,
            url: url.to_string(),
        })
    }

    /// Waits for the rendered DOM and the browser's exit.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Exited` if the browser exits unsuccessfully, or
    /// `RenderError::Io` if its output cannot be read.
    pub async fn capture(&mut self) -> Result<String, RenderError> {
        let mut stdout = self.child.stdout.take().ok_or_else(|| {
            RenderError::Io(std::io::Error::other("browser stdout already taken"))
        })?;

        let mut raw = Vec::new();
        stdout.read_to_end(&mut raw).await?;

        let status = self.child.wait().await?;
        if !status.success() {
            return Err(RenderError::Exited {
                url: self.url.clone(),
                code: status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // try_wait() is Ok(None) only while the process is still running
        if let Ok(None) = self.child.try_wait() {
            if let Err(e) = self.child.start_kill() {
                log::warn!("Failed to stop browser session for {}: {}", self.url, e);
            } else {
                log::debug!("Browser session for {} stopped", self.url);
            }
        }
    }
}

/// Rendered retrieval through a headless browser.
pub struct BrowserPageSource {
    browser: PathBuf,
    settle: Duration,
    timeout: Duration,
}

impl BrowserPageSource {
    /// Creates a source running `browser`.
    ///
    /// `timeout` bounds a whole session and must exceed `settle`.
    pub fn new(browser: PathBuf, settle: Duration, timeout: Duration) -> Self {
        Self {
            browser,
            settle,
            timeout,
        }
    }
}

#[async_trait]
impl PageSource for BrowserPageSource {
    async fn retrieve(&self, url: &Url) -> Result<String, ExtractionError> {
        let mut session = BrowserSession::launch(&self.browser, url, self.settle)?;

        match tokio::time::timeout(self.timeout, session.capture()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(RenderError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
            .into()),
        }
    }
}
