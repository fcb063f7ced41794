use std::cmp::Ordering;

use crate::domain::{
    common::{RecommendationConfig, entities::app_errors::CoreError},
    recommendation::{entities::MenuItem, ports::EmbeddingClient},
};

/// Cosine similarity of two vectors. Mismatched lengths and zero vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Indices of scores at or above `threshold`, best first, at most `top_k`.
/// Equal scores keep their original order.
pub fn select_top(scores: &[f32], threshold: f32, top_k: usize) -> Vec<usize> {
    let mut survivors: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| *score >= threshold)
        .collect();

    survivors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    survivors.truncate(top_k);

    survivors.into_iter().map(|(index, _)| index).collect()
}

/// Rank candidates against the cleaned query by embedding similarity.
///
/// Candidates and query are embedded in one batch, with the query last.
/// A wrong vector count or mixed dimensions is an embedding failure.
/// An empty vector means nothing reached the threshold.
pub async fn rank<'a, E>(
    embedding_client: &E,
    candidates: &[&'a MenuItem],
    cleaned_query: &str,
    config: &RecommendationConfig,
) -> Result<Vec<&'a MenuItem>, CoreError>
where
    E: EmbeddingClient,
{
    let mut texts: Vec<String> = candidates.iter().map(|item| item.composite_text()).collect();
    texts.push(cleaned_query.to_string());
    let expected = texts.len();

    let mut embeddings = embedding_client.embed(texts).await?;
    if embeddings.len() != expected {
        return Err(CoreError::ExternalServiceError(format!(
            "expected {} embeddings, got {}",
            expected,
            embeddings.len()
        )));
    }

    let query_embedding = embeddings.pop().unwrap_or_default();
    if let Some(embedding) = embeddings
        .iter()
        .find(|embedding| embedding.len() != query_embedding.len())
    {
        return Err(CoreError::ExternalServiceError(format!(
            "embedding dimension mismatch: query has {}, candidate has {}",
            query_embedding.len(),
            embedding.len()
        )));
    }

    let scores: Vec<f32> = embeddings
        .iter()
        .map(|embedding| cosine_similarity(&query_embedding, embedding))
        .collect();

    tracing::debug!("Similarity scores: {:?}", scores);

    Ok(select_top(&scores, config.similarity_threshold, config.top_k)
        .into_iter()
        .map(|index| candidates[index])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]), -1.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_exact_point_three() {
        // |b| = sqrt(9 + 81 + 9 + 1) = 10
        let score = cosine_similarity(&[1.0, 0.0, 0.0, 0.0], &[3.0, 9.0, 3.0, 1.0]);
        assert_eq!(score, 0.3);
    }

    #[test]
    fn test_select_top_orders_by_score() {
        let scores = [0.4, 0.9, 0.35, 0.7];
        assert_eq!(select_top(&scores, 0.3, 3), vec![1, 3, 0]);
    }

    #[test]
    fn test_select_top_threshold_is_inclusive() {
        let scores = [0.29, 0.3, 0.1];
        assert_eq!(select_top(&scores, 0.3, 3), vec![1]);
    }

    #[test]
    fn test_select_top_ties_keep_candidate_order() {
        let scores = [0.5, 0.8, 0.5, 0.5];
        assert_eq!(select_top(&scores, 0.3, 3), vec![1, 0, 2]);
    }

    #[test]
    fn test_select_top_nothing_survives() {
        assert!(select_top(&[0.1, -0.4], 0.3, 3).is_empty());
        assert!(select_top(&[], 0.3, 3).is_empty());
    }

    struct FixedEmbedder(Vec<Vec<f32>>);

    impl EmbeddingClient for FixedEmbedder {
        async fn embed(&self, _texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
            Ok(self.0.clone())
        }
    }

    fn menu() -> Vec<MenuItem> {
        ["Lemonade", "Espresso"]
            .into_iter()
            .map(|name| MenuItem {
                name: name.to_string(),
                category: "Beverage".to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_rank_keeps_candidates_above_threshold() {
        let menu = menu();
        let candidates: Vec<&MenuItem> = menu.iter().collect();
        let embedder = FixedEmbedder(vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 0.0]]);

        let ranked = rank(&embedder, &candidates, "iced tea", &RecommendationConfig::default())
            .await
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Espresso");
    }

    #[tokio::test]
    async fn test_rank_rejects_mixed_dimensions() {
        let menu = menu();
        let candidates: Vec<&MenuItem> = menu.iter().collect();
        let embedder = FixedEmbedder(vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0], vec![1.0, 0.0]]);
        // a negative threshold would otherwise let the mismatched candidate through
        let config = RecommendationConfig::new(3, -1.0).unwrap();

        let result = rank(&embedder, &candidates, "iced tea", &config).await;
        assert_eq!(
            result.unwrap_err(),
            CoreError::ExternalServiceError(
                "embedding dimension mismatch: query has 2, candidate has 3".to_string()
            )
        );
    }
}
