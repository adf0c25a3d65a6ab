use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod darksky;

/// The forecast request did not produce a usable response body.
///
/// Transport problems and non-success statuses are separate variants so
/// the log can tell them apart, but callers present both as the same
/// generic fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("forecast request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("forecast endpoint returned status {status}: {body_excerpt}")]
    Status {
        status: StatusCode,
        body_excerpt: String,
    },
}

/// Something that can fetch the current-conditions payload for a
/// coordinate pair. The single production implementation is
/// [`darksky::DarkSkyClient`]; tests substitute scripted stubs.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Issue one GET for the given coordinates and return the raw
    /// response body on any 2xx status.
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<String, FetchError>;
}

/// Pre-flight network check, consulted before a request is constructed.
#[async_trait]
pub trait Reachability: Send + Sync + Debug {
    async fn is_online(&self) -> bool;
}

/// [`Reachability`] probe that resolves a host name; a machine that
/// cannot resolve the forecast host is treated as offline.
#[derive(Debug, Clone)]
pub struct HostProbe {
    authority: String,
}

impl HostProbe {
    pub fn new(host: &str) -> Self {
        Self {
            authority: format!("{host}:443"),
        }
    }
}

#[async_trait]
impl Reachability for HostProbe {
    async fn is_online(&self) -> bool {
        match tokio::net::lookup_host(self.authority.as_str()).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(_) => false,
        }
    }
}
