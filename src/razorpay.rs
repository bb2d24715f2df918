//! Thin client for the Razorpay Orders API. One endpoint, basic auth with
//! the key pair, amounts always in minor units.

use serde::Deserialize;

use crate::config::{AppConfig, Credentials};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("razorpay credentials not configured")]
    MissingCredentials,
    #[error("order request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("razorpay rejected the order ({status}): {detail}")]
    Rejected {
        status: reqwest::StatusCode,
        detail: String,
    },
}

/// Order record as the processor returns it.
#[derive(Debug, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

/// Envelope Razorpay wraps rejections in.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    description: String,
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    orders_url: String,
    credentials: Option<Credentials>,
}

impl Client {
    pub fn new(config: &AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.gateway_timeout)
            .build()
            .expect("default reqwest client");
        Client {
            http,
            orders_url: format!("{}/v1/orders", config.api_base.trim_end_matches('/')),
            credentials: config.credentials.clone(),
        }
    }

    /// Creates an order with the processor. At most one retry, and only on
    /// connection-level failures; timeouts and processor rejections are
    /// surfaced as-is.
    pub async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, GatewayError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(GatewayError::MissingCredentials)?;

        let body = serde_json::json!({
            "amount": amount_minor,
            "currency": currency,
            "receipt": receipt,
        });

        let mut attempts = 0;
        let response = loop {
            attempts += 1;
            let sent = self
                .http
                .post(&self.orders_url)
                .basic_auth(&credentials.key_id, Some(&credentials.key_secret))
                .json(&body)
                .send()
                .await;
            match sent {
                Ok(response) => break response,
                Err(err) if err.is_timeout() => return Err(GatewayError::Timeout),
                Err(err) if err.is_connect() && attempts < 2 => {
                    tracing::warn!("razorpay connection failed, retrying: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        };

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&raw)
                .map(|body| body.error.description)
                .unwrap_or(raw);
            return Err(GatewayError::Rejected { status, detail });
        }

        Ok(response.json().await?)
    }
}
