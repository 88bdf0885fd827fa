//! Current-user endpoint

use reqwest::StatusCode;

use crate::{
    config::ApiConfig,
    constants::endpoints,
    error::{ClientError, ClientResult},
    models::UserProfile,
};

/// Read-only access to the signed-in user's data
#[derive(Debug, Clone)]
pub struct UserApi {
    client: reqwest::Client,
    current_user_url: String,
}

impl UserApi {
    pub fn new(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            current_user_url: config.endpoint(endpoints::CURRENT_USER),
        }
    }

    /// Fetch the user behind the current session cookie
    pub async fn current_user(&self) -> ClientResult<UserProfile> {
        let response = self.client.get(&self.current_user_url).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<UserProfile>().await?)
    }
}
