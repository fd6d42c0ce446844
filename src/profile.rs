use crate::client::GraphApi;
use crate::constants::ME_PATH;
use crate::error::GraphResult;
use serde_json::Value;

/// The `/me` record exactly as Graph returned it.
pub type UserProfile = Value;

/// Fetch the signed-in user's directory profile.
///
/// `access_token` goes out as the whole `Authorization` header value, so
/// include the `Bearer ` prefix yourself. Failures are logged once and
/// returned.
pub async fn fetch_user_profile(api: &dyn GraphApi, access_token: &str) -> GraphResult<UserProfile> {
    api.get_json(ME_PATH, access_token).await.map_err(|e| {
        log::error!("[graph] Failed to get user details: {}", e);
        e
    })
}
