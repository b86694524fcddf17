use taskboard_core::{ApiConfig, TaskboardError, TaskboardResult};
use taskboard_domain::{ApiErrorBody, AuthResponse, Credentials, Registration};

/// Client for the token-issuing auth endpoints. No bearer token is attached;
/// these are the calls that produce one.
pub struct AuthClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> TaskboardResult<AuthResponse> {
        tracing::debug!(email = %credentials.email, "logging in");
        self.post(self.config.login_url(), credentials, "login failed")
            .await
    }

    pub async fn register(&self, registration: &Registration) -> TaskboardResult<AuthResponse> {
        tracing::debug!(email = %registration.email, "registering user");
        self.post(self.config.register_url(), registration, "registration failed")
            .await
    }

    async fn post<B: serde::Serialize>(
        &self,
        url: String,
        body: &B,
        failure: &str,
    ) -> TaskboardResult<AuthResponse> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TaskboardError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            // Prefer the server's own message when the error body parses.
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("{failure} (HTTP {status})"),
            };
            tracing::warn!(%status, "{failure}");
            return Err(TaskboardError::Remote(message));
        }

        response
            .json()
            .await
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }
}
