use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADVICE_API_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

#[derive(Serialize, Debug)]
struct GenerationRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize, Debug)]
struct Generation {
    generated_text: String,
}

/// Ways a relay call can fail. The `Display` forms are what the page shows.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Error: {code} - {body}", code = .status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("An error occurred: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("An error occurred: {0}")]
    Malformed(String),
}

/// Forwards prompts to a hosted text-generation model.
#[derive(Clone)]
pub struct AdviceRelay {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<SecretString>,
}

impl AdviceRelay {
    pub fn new(api_url: impl Into<String>, api_token: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_token,
        }
    }

    /// Returns the generated text, or the failure rendered as a displayable string.
    pub async fn get_advice(&self, prompt: &str) -> String {
        match self.try_get_advice(prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(url = %self.api_url, "advice relay failed: {}", err);
                err.to_string()
            }
        }
    }

    pub async fn try_get_advice(&self, prompt: &str) -> Result<String, RelayError> {
        tracing::debug!(url = %self.api_url, prompt, "requesting advice");

        let mut request = self
            .client
            .post(&self.api_url)
            .json(&GenerationRequest { inputs: prompt });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }

        let body = response.text().await?;
        let generations: Vec<Generation> =
            serde_json::from_str(&body).map_err(|e| RelayError::Malformed(e.to_string()))?;

        generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| RelayError::Malformed("empty generation list".to_string()))
    }
}
