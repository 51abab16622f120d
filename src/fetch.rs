use async_trait::async_trait;
use log::debug;

use crate::vector::Vector;
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "http://everynoise.com";

/// Where listing pages come from.
#[async_trait(?Send)]
pub trait PageSource {
    fn rankings_url(&self, vector: Vector) -> String;

    fn countries_url(&self) -> String;

    /// Fetch a page body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain GET access to the everynoise listing pages.
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl PageSource for Fetcher {
    fn rankings_url(&self, vector: Vector) -> String {
        format!(
            "{}/everynoise1d.cgi?vector={}&scope=all",
            self.base_url,
            vector.keyword()
        )
    }

    fn countries_url(&self) -> String {
        format!("{}/countries.html", self.base_url)
    }

    /// Plain GET. Non-success statuses are errors; nothing is retried.
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Received {} bytes from {url}", body.len());
        Ok(body)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
