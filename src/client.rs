use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::Config;
use crate::types::{ContractError, UserRecord};

/// Thin typed client over the remote user endpoints
#[derive(Debug, Clone)]
pub struct UserApiClient {
    http: Client,
    base_url: Url,
}

/// A captured response: status code plus the raw body text.
/// The body is read eagerly so assertions can look at it more than once.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Extract a non-empty `message` field from a structured error body
    pub fn error_message(&self) -> Option<String> {
        let value = self.json().ok()?;
        value
            .get("message")?
            .as_str()
            .filter(|message| !message.is_empty())
            .map(|message| message.to_string())
    }
}

impl UserApiClient {
    pub fn new(config: &Config) -> Result<Self, ContractError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ContractError::Config(format!("invalid base URL {}: {}", config.base_url, e))
        })?;
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Build `{base}/user` or `{base}/user/{username}`. Usernames are pushed
    /// as a path segment so non-ASCII table entries get percent-encoded.
    fn user_url(&self, username: Option<&str>) -> Result<Url, ContractError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ContractError::Config(format!("base URL {} cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty().push("user");
            if let Some(username) = username {
                segments.push(username);
            }
        }
        Ok(url)
    }

    /// POST /user
    pub async fn create_user(&self, user: &UserRecord) -> Result<ApiResponse, ContractError> {
        let url = self.user_url(None)?;
        debug!("POST {}", url);
        let response = self.http.post(url).json(user).send().await?;
        Self::capture(response).await
    }

    /// PUT /user/{username} with a JSON body
    pub async fn update_user(
        &self,
        username: &str,
        payload: &UserRecord,
    ) -> Result<ApiResponse, ContractError> {
        let url = self.user_url(Some(username))?;
        debug!("PUT {}", url);
        let response = self.http.put(url).json(payload).send().await?;
        Self::capture(response).await
    }

    /// DELETE /user/{username}
    pub async fn delete_user(&self, username: &str) -> Result<ApiResponse, ContractError> {
        let url = self.user_url(Some(username))?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        Self::capture(response).await
    }

    async fn capture(response: reqwest::Response) -> Result<ApiResponse, ContractError> {
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
