// Shared test fakes for the pipeline's injectable collaborators.
//
// Each fake answers from a fixed table so tests can describe a whole sweep
// without network access.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use url::Url;

use domain_sweep::dns::AddressResolver;
use domain_sweep::error_handling::{
    ExtractionError, LookupError, ResolutionError, RetrievalError,
};
use domain_sweep::fetch::PageSource;
use domain_sweep::whois::RegistrationLookup;

/// Serves fixed markup per seed URL; unknown URLs answer HTTP 500.
#[allow(dead_code)] // Used by other test files
pub struct PageTable {
    pages: HashMap<String, String>,
    panicking: Vec<String>,
}

#[allow(dead_code)] // Used by other test files
impl PageTable {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            panicking: Vec::new(),
        }
    }

    /// Makes the retrieval task for `url` panic.
    pub fn panicking(mut self, url: &str) -> Self {
        self.panicking.push(url.to_string());
        self
    }
}

#[async_trait]
impl PageSource for PageTable {
    async fn retrieve(&self, url: &Url) -> Result<String, ExtractionError> {
        if self.panicking.iter().any(|u| u == url.as_str()) {
            panic!("page source crashed on {}", url);
        }
        self.pages.get(url.as_str()).cloned().ok_or_else(|| {
            RetrievalError::Status {
                url: url.to_string(),
                status: 500,
            }
            .into()
        })
    }
}

/// Page source that records how many retrievals overlap.
#[allow(dead_code)] // Used by other test files
pub struct SlowPages {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl SlowPages {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for SlowPages {
    async fn retrieve(&self, url: &Url) -> Result<String, ExtractionError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(format!(r#"<a href="{}">self</a>"#, url))
    }
}

/// Registration lookup answering from a table of expiration dates.
///
/// Domains missing from the table fail with a service error.
#[allow(dead_code)] // Used by other test files
pub struct RegistrationTable {
    dates: HashMap<String, Vec<DateTime<Utc>>>,
}

#[allow(dead_code)] // Used by other test files
impl RegistrationTable {
    pub fn new(entries: &[(&str, Vec<DateTime<Utc>>)]) -> Self {
        Self {
            dates: entries
                .iter()
                .map(|(domain, dates)| (domain.to_string(), dates.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl RegistrationLookup for RegistrationTable {
    async fn expiration_dates(&self, domain: &str) -> Result<Vec<DateTime<Utc>>, LookupError> {
        self.dates
            .get(domain)
            .cloned()
            .ok_or_else(|| LookupError::Service {
                domain: domain.to_string(),
                status: 503,
            })
    }
}

/// Wraps a registration lookup and counts the queries per domain.
#[allow(dead_code)] // Used by other test files
pub struct CountingRegistration {
    inner: RegistrationTable,
    calls: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)] // Used by other test files
impl CountingRegistration {
    pub fn new(inner: RegistrationTable) -> Self {
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls_for(&self, domain: &str) -> usize {
        self.calls.lock().unwrap().get(domain).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl RegistrationLookup for CountingRegistration {
    async fn expiration_dates(&self, domain: &str) -> Result<Vec<DateTime<Utc>>, LookupError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(domain.to_string())
            .or_insert(0) += 1;
        self.inner.expiration_dates(domain).await
    }
}

/// Resolver answering from a table; unknown names have no records.
#[allow(dead_code)] // Used by other test files
pub struct AddressTable {
    addresses: HashMap<String, Vec<String>>,
    failing: Vec<String>,
}

#[allow(dead_code)] // Used by other test files
impl AddressTable {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            addresses: entries
                .iter()
                .map(|(domain, addrs)| {
                    (
                        domain.to_string(),
                        addrs.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
            failing: Vec::new(),
        }
    }

    /// Makes lookups of `domain` time out.
    pub fn failing(mut self, domain: &str) -> Self {
        self.failing.push(domain.to_string());
        self
    }
}

#[async_trait]
impl AddressResolver for AddressTable {
    async fn resolve(&self, host: &str) -> Result<Vec<String>, ResolutionError> {
        if self.failing.iter().any(|d| d == host) {
            return Err(ResolutionError::Timeout {
                domain: host.to_string(),
                timeout: Duration::from_secs(3),
            });
        }
        Ok(self.addresses.get(host).cloned().unwrap_or_default())
    }
}

#[allow(dead_code)] // Used by other test files
pub fn long_ago() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()
}

#[allow(dead_code)] // Used by other test files
pub fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap()
}

#[allow(dead_code)] // Used by other test files
pub fn seeds(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|u| u.to_string()).collect()
}

/// Starts a TCP server that accepts connections and never answers.
///
/// Connections stay open until the returned task is aborted or the runtime
/// shuts down.
#[allow(dead_code)] // Used by other test files
pub async fn silent_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent server");
    let addr = listener.local_addr().expect("local address");
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (addr, handle)
}
