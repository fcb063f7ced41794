use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.3;

#[derive(Clone, Debug)]
pub struct MenuwiseConfig {
    pub embedding: EmbeddingConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug)]
pub struct EmbeddingConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Tunables of the recommendation pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecommendationConfig {
    pub top_k: usize,
    pub similarity_threshold: f32,
}

impl RecommendationConfig {
    pub fn new(top_k: usize, similarity_threshold: f32) -> Result<Self, CoreError> {
        if top_k == 0 {
            return Err(CoreError::InvalidConfig(
                "top_k must be at least 1".to_string(),
            ));
        }

        if !(-1.0..=1.0).contains(&similarity_threshold) {
            return Err(CoreError::InvalidConfig(format!(
                "similarity threshold {} is outside [-1, 1]",
                similarity_threshold
            )));
        }

        Ok(Self {
            top_k,
            similarity_threshold,
        })
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
