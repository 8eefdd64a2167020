use contracts::system::auth::UserProfile;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

/// Get the profile behind the session cookie
pub async fn fetch_profile() -> Result<UserProfile, String> {
    let response = Request::get(&api_url("/api/user/profile"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get profile failed: {}", response.status()));
    }

    response
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (invalidate the server session)
pub async fn logout() -> Result<(), String> {
    let response = Request::post(&api_url("/api/user/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
