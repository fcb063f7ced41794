use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::RecommendationResult, value_objects::RecommendInput},
};

/// Text embedding model used by the semantic ranker.
#[cfg_attr(test, mockall::automock)]
pub trait EmbeddingClient: Send + Sync {
    /// Embed every text, returning one vector per input in input order.
    fn embed(
        &self,
        texts: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, CoreError>> + Send;
}

/// Service trait for menu recommendations
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = RecommendationResult> + Send;
}
