use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::razorpay::GatewayError;

/// Everything the payment routes can fail with. Mapped to safe JSON bodies
/// at the HTTP boundary: processor diagnostics are logged here and only the
/// description is echoed, key material never appears in either.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Order amount absent, non-numeric, or not strictly positive. Rejected
    /// before any gateway call.
    #[error("invalid amount")]
    InvalidAmount,
    /// A payment claim arrived with a missing or empty field.
    #[error("missing claim fields")]
    MissingClaimFields,
    /// The processor rejected the create-order call.
    #[error("gateway rejected order: {detail}")]
    Gateway { detail: String },
    /// The outbound call exceeded the configured bound.
    #[error("gateway call timed out")]
    GatewayTimeout,
    /// Key pair missing at call time (degraded startup).
    #[error("razorpay credentials not configured")]
    Unconfigured,
    /// Same condition on the verify path, where the body carries `verified`.
    #[error("razorpay credentials not configured")]
    UnconfiguredVerify,
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::MissingCredentials => ApiError::Unconfigured,
            GatewayError::Timeout => ApiError::GatewayTimeout,
            GatewayError::Rejected { detail, .. } => ApiError::Gateway { detail },
            GatewayError::Transport(err) => ApiError::Gateway {
                detail: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid amount" }),
            ),
            ApiError::MissingClaimFields => (
                StatusCode::BAD_REQUEST,
                json!({ "verified": false, "error": "Missing fields" }),
            ),
            ApiError::Gateway { detail } => {
                tracing::error!("razorpay create-order failed: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Payment gateway error", "details": detail }),
                )
            }
            ApiError::GatewayTimeout => {
                tracing::error!("razorpay create-order timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    json!({ "error": "Payment gateway timed out" }),
                )
            }
            ApiError::Unconfigured => {
                tracing::error!("create-order called without configured credentials");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Payment gateway not configured" }),
                )
            }
            ApiError::UnconfiguredVerify => {
                tracing::error!("verify-payment called without configured credentials");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "verified": false, "error": "Payment gateway not configured" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
