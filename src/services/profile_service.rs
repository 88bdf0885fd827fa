//! Profile service

use tracing::error;

use crate::{
    api::UserApi,
    config::ProfileConfig,
    error::ClientResult,
    views::profile::ProfileSummary,
};

/// Profile service for the statistics view
pub struct ProfileService;

impl ProfileService {
    /// Fetch the signed-in user and summarize their progress
    pub async fn load(api: &UserApi, config: &ProfileConfig) -> ClientResult<ProfileSummary> {
        let user = api.current_user().await.map_err(|e| {
            error!(code = e.error_code(), error = %e, "Error fetching user");
            e
        })?;

        Ok(ProfileSummary::from_user(&user, config.total_problems))
    }
}
