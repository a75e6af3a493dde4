//! Handle to the hosting platform's API (GitHub).
//!
//! The action holds a [`GitHubClient`] so later steps can talk to the platform, but
//! nothing in the current action calls it. Building one never touches the network.

use std::env;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Serialize;
use tracing::info;

pub use crate::error::PlatformError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("s3-upload-action/", env!("CARGO_PKG_VERSION"));

/// Workflow run context as exported by the runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitHubContext {
    /// `owner/repo`
    pub repository: Option<String>,
    pub sha: Option<String>,
    pub git_ref: Option<String>,
    pub workflow: Option<String>,
    pub run_id: Option<String>,
    pub event_name: Option<String>,
    pub actor: Option<String>,
    pub api_url: String,
}

impl GitHubContext {
    pub fn from_env() -> Self {
        let var = |key: &str| env::var(key).ok().filter(|v| !v.is_empty());
        GitHubContext {
            repository: var("GITHUB_REPOSITORY"),
            sha: var("GITHUB_SHA"),
            git_ref: var("GITHUB_REF"),
            workflow: var("GITHUB_WORKFLOW"),
            run_id: var("GITHUB_RUN_ID"),
            event_name: var("GITHUB_EVENT_NAME"),
            actor: var("GITHUB_ACTOR"),
            api_url: var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

pub struct GitHubClient {
    context: GitHubContext,
    http: reqwest::Client,
}

impl GitHubClient {
    pub fn new(context: GitHubContext, token: Option<&str>) -> Result<Self, PlatformError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        info!(
            repository = context.repository.as_deref().unwrap_or("<unknown>"),
            api_url = %context.api_url,
            token_set = token.is_some(),
            "Initialized GitHub client"
        );
        Ok(GitHubClient { context, http })
    }

    /// Builds a client from `GITHUB_*` variables, authenticating with `GITHUB_TOKEN` when set.
    pub fn from_env() -> Result<Self, PlatformError> {
        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        Self::new(GitHubContext::from_env(), token.as_deref())
    }

    pub fn context(&self) -> &GitHubContext {
        &self.context
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// REST URL of the current repository, if the runner exported one.
    pub fn repository_url(&self) -> Option<String> {
        self.context.repository.as_ref().map(|repo| {
            format!(
                "{}/repos/{}",
                self.context.api_url.trim_end_matches('/'),
                repo
            )
        })
    }
}
