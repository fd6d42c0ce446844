use crate::client::GraphApi;
use crate::constants::ME_PHOTO_PATH;
use crate::error::GraphResult;
use base64::{engine::general_purpose, Engine as _};

/// Fetch the signed-in user's profile photo as standard base64.
///
/// Content type and size are not kept. A user without a photo comes back
/// as a 404 [`GraphError::Status`](crate::GraphError::Status).
pub async fn fetch_user_photo(api: &dyn GraphApi, access_token: &str) -> GraphResult<String> {
    match api.get_bytes(ME_PHOTO_PATH, access_token).await {
        Ok(bytes) => Ok(general_purpose::STANDARD.encode(bytes)),
        Err(e) => {
            log::error!("[graph] Failed to get user photo: {}", e);
            Err(e)
        }
    }
}
