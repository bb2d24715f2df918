use axum::{extract::State, Json};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::err_responses::ApiError;

/// Razorpay operates in paisa; the browser sends rupees.
const CURRENCY: &str = "INR";

#[derive(Deserialize)]
pub struct RequestPayload {
    // Deserialized loosely so that `"abc"` or a missing field turns into
    // `Invalid amount` rather than a body-rejection status.
    #[serde(default)]
    amount: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    order_id: String,
    amount: i64,
    currency: String,
    key_id: String,
}

/// Major units in, minor units out: `round(amount * 100)`. `None` for
/// anything not strictly positive or too large for an i64.
fn to_minor_units(amount: Decimal) -> Option<i64> {
    if amount <= Decimal::ZERO {
        return None;
    }
    amount.checked_mul(Decimal::ONE_HUNDRED)?.round().to_i64()
}

/// Best-effort unique, only used for processor-side bookkeeping.
fn receipt_id() -> String {
    format!("receipt_{}", OffsetDateTime::now_utc().unix_timestamp_nanos())
}

pub async fn handler(
    State(state): State<crate::AppState>,
    Json(payload): Json<RequestPayload>,
) -> Result<Json<ResponseBody>, ApiError> {
    let amount: Decimal =
        serde_json::from_value(payload.amount).map_err(|_| ApiError::InvalidAmount)?;
    let amount_minor = to_minor_units(amount).ok_or(ApiError::InvalidAmount)?;

    let credentials = state
        .config
        .credentials
        .as_ref()
        .ok_or(ApiError::Unconfigured)?;

    let order = state
        .razorpay
        .create_order(amount_minor, CURRENCY, &receipt_id())
        .await?;

    // The public key id is all the checkout widget needs; the secret stays
    // in-process.
    Ok(Json(ResponseBody {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: credentials.key_id.clone(),
    }))
}
