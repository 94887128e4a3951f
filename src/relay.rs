use reqwest::Client;
use serde_json::json;
use std::{env, fmt, time::Duration};
use tracing::info;

pub const MIN_DURATION_SECS: u64 = 1;
pub const MAX_DURATION_SECS: u64 = 30;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// The watering actuator behind the web app: either the real device over
/// HTTP, or a mock that just waits out the duration.
#[derive(Clone)]
pub enum Relay {
    Http { base_url: String, client: Client },
    Mock,
}

impl Relay {
    /// Picks the relay from the environment: `WATERING_API_BASE_URL` selects
    /// the HTTP device, otherwise (or with `MOCK_RELAY=true`) the mock.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let forced_mock = env::var("MOCK_RELAY")
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if forced_mock {
            info!("relay running in mock mode (MOCK_RELAY=true)");
            return Ok(Self::Mock);
        }

        match env::var("WATERING_API_BASE_URL") {
            Ok(base_url) => {
                let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
                info!("relay targeting {base_url}");
                Ok(Self::Http { base_url, client })
            }
            Err(_) => {
                info!("WATERING_API_BASE_URL not set, relay running in mock mode");
                Ok(Self::Mock)
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    /// Opens the water for `duration_secs` seconds. Returns the device's
    /// status message, if it reported one.
    pub async fn run(&self, duration_secs: u64) -> Result<String, RelayError> {
        match self {
            Self::Mock => {
                info!("[mock] relay on for {duration_secs}s");
                tokio::time::sleep(Duration::from_secs(duration_secs)).await;
                info!("[mock] relay off");
                Ok(String::new())
            }
            Self::Http { base_url, client } => {
                let response = client
                    .post(format!("{base_url}/water"))
                    .json(&json!({ "duration": duration_secs }))
                    .send()
                    .await?
                    .error_for_status()?;
                let body: serde_json::Value = response.json().await?;
                let message = body
                    .get("status")
                    .and_then(|value| value.as_str())
                    .unwrap_or_default();
                Ok(message.to_string())
            }
        }
    }

    /// Reachability probe against the device.
    pub async fn ping(&self) -> Result<String, RelayError> {
        match self {
            Self::Mock => Ok("pong (mock)".to_string()),
            Self::Http { base_url, client } => {
                let response = client.get(format!("{base_url}/ping")).send().await?;
                Ok(response.text().await?)
            }
        }
    }
}

#[derive(Debug)]
pub struct RelayError(String);

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for RelayError {}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}
