// http.rs
use crate::scraper::document::{DocumentSession, PageSource};
use crate::scraper::page::SessionLauncher;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Fetches listing pages over HTTP. Pages are expected to be server-rendered.
pub struct HttpSource {
    client: Client,
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| navigation_error(url, timeout, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Navigation {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        resp.text().map_err(|e| navigation_error(url, timeout, e))
    }
}

fn navigation_error(url: &str, timeout: Duration, e: reqwest::Error) -> ScraperError {
    if e.is_timeout() {
        ScraperError::NavigationTimeout {
            url: url.to_string(),
            timeout,
        }
    } else {
        ScraperError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

/// Starts one HTTP-backed session per batch run.
pub struct HttpLauncher {
    user_agent: String,
}

impl HttpLauncher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl SessionLauncher for HttpLauncher {
    type Session = DocumentSession<HttpSource>;

    fn launch(&self) -> Result<Self::Session, ScraperError> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| ScraperError::Launch(e.to_string()))?;

        tracing::debug!("browsing session opened");
        Ok(DocumentSession::new(HttpSource { client }))
    }
}
