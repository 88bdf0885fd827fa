//! HTTP client construction

use crate::config::ApiConfig;
use crate::error::ClientResult;

/// Create the shared HTTP client
///
/// Cookies are kept so the session cookie set at login is sent with every
/// request.
pub fn build_http_client(config: &ApiConfig) -> ClientResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .cookie_store(true)
        .build()?;

    Ok(client)
}
