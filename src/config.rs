use std::{env, fmt, time::Duration};

const DEFAULT_API_BASE: &str = "https://api.razorpay.com";
const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_PORT: u16 = 5000;

/// Razorpay key pair. The id is public (the hosted checkout widget needs it
/// to open); the secret authenticates order creation and signs payment
/// claims, and must never leave the process.
#[derive(Clone)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Process-wide configuration, read from the environment once at startup and
/// immutable afterwards. Handlers receive it through `AppState`, never via
/// ambient lookups.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub credentials: Option<Credentials>,
    pub api_base: String,
    pub gateway_timeout: Duration,
    pub port: u16,
}

impl AppConfig {
    /// A missing key pair is tolerated: the service starts degraded and the
    /// payment routes refuse requests with a configuration error instead of
    /// the process failing to boot.
    pub fn from_env() -> Self {
        let credentials = match (
            env::var("RAZORPAY_KEY_ID"),
            env::var("RAZORPAY_KEY_SECRET"),
        ) {
            (Ok(key_id), Ok(key_secret)) => Some(Credentials { key_id, key_secret }),
            _ => {
                tracing::warn!(
                    "RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET not set, \
                     payment routes will refuse requests"
                );
                None
            }
        };

        let api_base =
            env::var("RAZORPAY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let gateway_timeout = env::var("GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_GATEWAY_TIMEOUT);

        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        AppConfig {
            credentials,
            api_base,
            gateway_timeout,
            port,
        }
    }
}
