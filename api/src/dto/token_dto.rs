use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/tokens`
///
/// A missing `user_id` is treated like a blank one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueTokenRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    pub token: String,
    pub user_id: String,
    pub expires_at: i64, // epoch millis
    pub expires_in: i64, // seconds
}

/// Body of `POST /api/v1/tokens/validate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    pub user_id: String,
}
