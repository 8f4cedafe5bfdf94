// fetch.rs
use crate::error::{ChartError, Result};
use crate::settings;
use reqwest::blocking::Client;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Source of the quote text: a local file or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(String),
    Url(String),
}

impl DataSource {
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(location.to_string())
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(settings::DATA_SOURCE_ENV) {
            Ok(location) if !location.trim().is_empty() => Self::from_location(&location),
            _ => Self::from_location(settings::DEFAULT_DATA_SOURCE),
        }
    }

    pub fn location(&self) -> &str {
        match self {
            DataSource::File(path) => path,
            DataSource::Url(url) => url,
        }
    }
}

/// Blocks until the whole resource is read. Network loads are retried
/// `LOAD_RETRIES` times with a pause between attempts.
pub fn load_source(source: &DataSource) -> Result<String> {
    match source {
        DataSource::File(path) => load_file(Path::new(path)),
        DataSource::Url(url) => {
            let client = Client::builder()
                .timeout(Duration::from_secs(settings::LOAD_TIMEOUT_SECS))
                .build()
                .map_err(|e| load_error(url, e))?;
            let mut attempt = 0;
            loop {
                match fetch_text(&client, url) {
                    Ok(text) => return Ok(text),
                    Err(e) if attempt < settings::LOAD_RETRIES => {
                        attempt += 1;
                        tracing::warn!("fetch {} failed ({}), retry {}/{}", url, e, attempt, settings::LOAD_RETRIES);
                        thread::sleep(Duration::from_millis(settings::LOAD_RETRY_PAUSE_MS));
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| load_error(&path.display().to_string(), e))?;
    tracing::info!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| load_error(url, e))?;
    let text = response.text().map_err(|e| load_error(url, e))?;
    tracing::info!("fetched {} bytes from {}", text.len(), url);
    Ok(text)
}

fn load_error(resource: &str, err: impl std::fmt::Display) -> ChartError {
    ChartError::Load { resource: resource.to_string(), reason: err.to_string() }
}
