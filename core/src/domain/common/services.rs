use crate::domain::{
    common::RecommendationConfig, recommendation::ports::EmbeddingClient,
};

/// Service wiring the recommendation pipeline to its embedding collaborator.
#[derive(Clone)]
pub struct Service<E>
where
    E: EmbeddingClient,
{
    pub(crate) embedding_client: E,
    pub(crate) config: RecommendationConfig,
}

impl<E> Service<E>
where
    E: EmbeddingClient,
{
    pub fn new(embedding_client: E, config: RecommendationConfig) -> Self {
        Self {
            embedding_client,
            config,
        }
    }

    pub fn config(&self) -> RecommendationConfig {
        self.config
    }
}
