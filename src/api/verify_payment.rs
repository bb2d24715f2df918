use axum::{extract::State, Json};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::err_responses::ApiError;

/// Claim the browser submits after the checkout widget reports success.
/// Field names follow the widget's callback payload.
#[derive(Deserialize)]
pub struct PaymentClaim {
    #[serde(default)]
    razorpay_order_id: String,
    #[serde(default)]
    razorpay_payment_id: String,
    #[serde(default)]
    razorpay_signature: String,
}

#[derive(Serialize)]
pub struct ResponseBody {
    verified: bool,
}

/// Checks a claim against `HMAC-SHA256(secret, "{order_id}|{payment_id}")`,
/// the exact payload Razorpay countersigns. The comparison runs through
/// `Mac::verify_slice`, which is constant-time over the full tag length;
/// submissions that are not valid hex simply fail to verify.
fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Ok(submitted) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac.verify_slice(&submitted).is_ok()
}

/// Pure and local: no network call, no storage, no single-use marking.
/// Replaying an identical valid claim verifies `true` again.
pub async fn handler(
    State(state): State<crate::AppState>,
    Json(claim): Json<PaymentClaim>,
) -> Result<Json<ResponseBody>, ApiError> {
    if claim.razorpay_order_id.is_empty()
        || claim.razorpay_payment_id.is_empty()
        || claim.razorpay_signature.is_empty()
    {
        // No HMAC is computed for malformed input.
        return Err(ApiError::MissingClaimFields);
    }

    let credentials = state
        .config
        .credentials
        .as_ref()
        .ok_or(ApiError::UnconfiguredVerify)?;

    let verified = verify_signature(
        &credentials.key_secret,
        &claim.razorpay_order_id,
        &claim.razorpay_payment_id,
        &claim.razorpay_signature,
    );

    Ok(Json(ResponseBody { verified }))
}
