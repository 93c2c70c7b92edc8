//! Blocking HTTP client for the TrendHire API
//!
//! One GET per call, no retries. Failures never abort the caller: the
//! `call_api` family records an error notice and returns `None`.

use crate::config::Config;
use crate::error::ApiError;
use crate::response::{self, SkillAnalysis};
use crate::types::{Notice, TrendingJob};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use urlencoding::encode;

/// Raw response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub trait HttpTransport {
    /// Issue a single GET. Transport-level failures come back as
    /// `ApiError::Transport` carrying the underlying message.
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, ApiError>;
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(timeout)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Canned transport for tests and offline demos. Clones share the
/// request log, so a clone handed to a client can be inspected later.
#[derive(Clone)]
pub struct MockTransport {
    outcome: Result<HttpResponse, ApiError>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Err(ApiError::Transport(message.to_string())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs requested so far, query string included
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl HttpTransport for MockTransport {
    fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        _timeout: Duration,
    ) -> Result<HttpResponse, ApiError> {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let full = if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query.join("&"))
        };

        if let Ok(mut log) = self.requests.lock() {
            log.push(full);
        }

        self.outcome.clone()
    }
}

pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    transport: Box<dyn HttpTransport>,
}

impl ApiClient {
    /// Client over the real HTTP stack
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::with_transport(config, Box::new(ReqwestTransport::new()?)))
    }

    pub fn with_transport(config: &Config, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET `{base_url}/{endpoint}` and parse the body on HTTP 200
    pub fn call(&self, endpoint: &str, params: Option<&[(&str, &str)]>) -> Result<Value, ApiError> {
        let url = self.url_for(endpoint);
        let params: Vec<(String, String)> = params
            .unwrap_or(&[])
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        log::debug!("GET {} params={:?}", url, params);

        let response = self.transport.get(&url, &params, self.timeout).map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            e
        })?;

        if response.status != 200 {
            log::warn!("GET {} returned status {}", url, response.status);
            return Err(ApiError::Status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Like `call`, but any failure becomes an error notice and `None`
    pub fn call_api(
        &self,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
        notices: &mut Vec<Notice>,
    ) -> Option<Value> {
        match self.call(endpoint, params) {
            Ok(value) => Some(value),
            Err(e) => {
                notices.push(Notice::error(e.to_string()));
                None
            }
        }
    }

    pub fn fetch_trending_jobs(&self, notices: &mut Vec<Notice>) -> Option<Vec<TrendingJob>> {
        let value = self.call_api("trending-jobs", None, notices)?;
        surface(response::parse_trending_jobs(value), notices)
    }

    pub fn fetch_skill_analysis(
        &self,
        skills_input: &str,
        notices: &mut Vec<Notice>,
    ) -> Option<SkillAnalysis> {
        // One path segment: '#', '?' and '/' must not split the route
        let endpoint = format!("skills-analysis/{}", encode(skills_input.trim()));
        let value = self.call_api(&endpoint, None, notices)?;
        surface(response::parse_skill_analysis(value), notices)
    }
}

fn surface<T>(result: Result<T, ApiError>, notices: &mut Vec<Notice>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}", e);
            notices.push(Notice::error(e.to_string()));
            None
        }
    }
}
