//! Blocking HTTP client for the OBS API
//!
//! The tool is single-threaded and strictly sequential, so the blocking
//! reqwest client is used. Each lookup is one `GET /source/<project>/_meta`
//! with HTTP basic auth; a 404 means the project is absent, every other
//! non-success status is a request failure.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::credentials::Credentials;
use crate::error::{ObsctlError, Result};
use crate::obs::{ProjectLookup, ProjectMeta, meta};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OBS API client holding the HTTP client and credentials
pub struct ObsClient {
    http: Client,
    api_url: String,
    username: String,
    password: String,
}

impl ObsClient {
    /// Construct a client from loaded credentials.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("obsctl/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ObsctlError::ClientBuildFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_url: credentials.api_url.clone(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        })
    }

    fn meta_url(&self, project: &str) -> String {
        format!(
            "{}/source/{}/_meta",
            self.api_url.trim_end_matches('/'),
            project
        )
    }
}

impl ProjectLookup for ObsClient {
    fn project_meta(&self, name: &str) -> Result<Option<ProjectMeta>> {
        let response = self
            .http
            .get(self.meta_url(name))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(|e| ObsctlError::RemoteRequestFailed {
                project: name.to_string(),
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response
                    .text()
                    .map_err(|e| ObsctlError::RemoteRequestFailed {
                        project: name.to_string(),
                        reason: e.to_string(),
                    })?;

                let meta_name = meta::parse_project_name(&body).ok_or_else(|| {
                    ObsctlError::MetaParseFailed {
                        project: name.to_string(),
                        reason: "no <project name=\"...\"> element in meta document".to_string(),
                    }
                })?;

                Ok(Some(ProjectMeta { name: meta_name }))
            }
            status => Err(ObsctlError::RemoteRequestFailed {
                project: name.to_string(),
                reason: format!("unexpected status {status}"),
            }),
        }
    }
}
