//! Shared HTTP response helpers.

use crate::error::ClientError;

/// Map a non-success response to [`ClientError::Api`] with its status code
/// and body. Successful responses are returned unchanged.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Join an endpoint path onto a base URL, tolerating a trailing slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}
