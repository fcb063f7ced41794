use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{EmbeddingConfig, entities::app_errors::CoreError},
    recommendation::ports::EmbeddingClient,
};

/// Client for OpenAI-compatible `/v1/embeddings` endpoints.
#[derive(Debug, Clone)]
pub struct HttpEmbeddingClient {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl HttpEmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::InvalidConfig(format!("Failed to build embedding client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    async fn call_embedding_api(&self, texts: &[String]) -> Result<EmbeddingResponse, CoreError> {
        let mut request = self.client.post(&self.endpoint).json(&EmbeddingRequest {
            model: &self.model,
            input: texts,
        });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Embedding API request failed: {}", e);
            CoreError::ExternalServiceError(format!("Embedding API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Embedding API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Embedding API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse embedding response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse embedding response: {}", e))
        })
    }
}

fn into_ordered_vectors(mut data: Vec<EmbeddingData>) -> Vec<Vec<f32>> {
    data.sort_by_key(|entry| entry.index);
    data.into_iter().map(|entry| entry.embedding).collect()
}

impl EmbeddingClient for HttpEmbeddingClient {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(model = %self.model, count = texts.len(), "Requesting embeddings");
        let response = self.call_embedding_api(&texts).await?;

        Ok(into_ordered_vectors(response.data))
    }
}
