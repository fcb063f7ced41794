use crate::{
    domain::common::{MenuwiseConfig, services::Service},
    infrastructure::embedding::HttpEmbeddingClient,
};

pub type MenuwiseService = Service<HttpEmbeddingClient>;

pub fn create_service(config: MenuwiseConfig) -> Result<MenuwiseService, anyhow::Error> {
    let embedding_client = HttpEmbeddingClient::new(&config.embedding)?;

    tracing::info!(
        endpoint = %config.embedding.endpoint,
        model = %config.embedding.model,
        top_k = config.recommendation.top_k,
        threshold = config.recommendation.similarity_threshold,
        "Recommendation service configured"
    );

    Ok(Service::new(embedding_client, config.recommendation))
}
