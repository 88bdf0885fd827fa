//! Client state management
//!
//! This module contains the shared client state that submission views and
//! profile views are built from.

use std::sync::Arc;

use crate::api::{build_http_client, HttpGradingBackend, UserApi};
use crate::config::Config;
use crate::error::ClientResult;

/// Shared client state
#[derive(Clone)]
pub struct ClientState {
    inner: Arc<ClientStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct ClientStateInner {
    /// HTTP client with the session cookie store
    pub http: reqwest::Client,

    /// Client configuration
    pub config: Config,
}

impl ClientState {
    /// Create a new client state
    pub fn new(config: Config) -> ClientResult<Self> {
        let http = build_http_client(&config.api)?;

        Ok(Self {
            inner: Arc::new(ClientStateInner { http, config }),
        })
    }

    /// Get a reference to the HTTP client
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Grading backend sharing this state's HTTP client
    pub fn grading_backend(&self) -> HttpGradingBackend {
        HttpGradingBackend::new(self.http().clone(), &self.config().api)
    }

    /// User API sharing this state's HTTP client
    pub fn user_api(&self) -> UserApi {
        UserApi::new(self.http().clone(), &self.config().api)
    }
}
