#[cfg(test)]
#[path = "dolegal_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ChatError;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;

/// Client for the DoLegal HTTP API.
pub struct DoLegal {
    url: String,
    timeout: String,
}

impl Default for DoLegal {
    fn default() -> DoLegal {
        return DoLegal {
            url: Config::get(ConfigKey::ApiURL),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for DoLegal {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = match reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "DoLegal API is not running");
                bail!("DoLegal API is not running");
            }
        };

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "DoLegal API health check failed");
            bail!("DoLegal API health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        tracing::debug!(body = ?request, "Chat request");
        let res = reqwest::Client::new()
            .post(format!("{url}/api/chat", url = self.url.trim_end_matches('/')))
            .json(&request)
            .send()
            .await
            .map_err(|err| return ChatError::Transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "Failed to make chat request to DoLegal"
            );
            return Err(ChatError::Transport(format!("API error: {status}")));
        }

        let body = res
            .text()
            .await
            .map_err(|err| return ChatError::Transport(err.to_string()))?;
        tracing::debug!(body = body, "Chat response");

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| return ChatError::MalformedResponse(err.to_string()))?;

        return parsed.validate();
    }
}
