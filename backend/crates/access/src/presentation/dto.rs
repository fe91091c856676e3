//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Access
// ============================================================================

/// Request access request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAccessRequest {
    pub email: String,
    pub message: String,
}

/// Request access response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAccessResponse {
    pub success: String,
}

// ============================================================================
// Verify Access Request (admin link)
// ============================================================================

/// Verification link query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccessQuery {
    pub email: String,
}

/// Verification response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccessResponse {
    pub success: String,
}

// ============================================================================
// Redeem Access Code
// ============================================================================

/// Access code submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCodeRequest {
    pub access_code: String,
}

/// Access code redemption response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCodeResponse {
    pub success: String,
    pub redirect: String,
}
