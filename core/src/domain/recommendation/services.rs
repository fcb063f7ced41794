use tracing::instrument;

use crate::domain::{
    common::services::Service,
    recommendation::{
        category::classify,
        entities::{RecommendationResult, RecommendationStage, SuggestionCategory},
        matcher::exact_matches,
        normalizer::normalize,
        ports::{EmbeddingClient, RecommendationService},
        ranker::rank,
        value_objects::RecommendInput,
    },
};

fn suggestion_message(category: SuggestionCategory, table: &str) -> String {
    format!(
        "No exact matches for {}, but these might suit your taste for table {}",
        category.label(),
        table
    )
}

impl<E> RecommendationService for Service<E>
where
    E: EmbeddingClient,
{
    #[instrument(
        skip(self, input),
        fields(table_id = %input.table_label(), menu_size = input.menu.len())
    )]
    async fn recommend(&self, input: RecommendInput) -> RecommendationResult {
        let table = input.table_label().to_string();
        let top_k = self.config.top_k;

        // 1. Normalize input
        let Some(query) = normalize(&input.user_input) else {
            tracing::warn!("No user input provided");
            return RecommendationResult::empty(
                RecommendationStage::EmptyQuery,
                "Please provide input".to_string(),
            );
        };

        if input.menu.is_empty() {
            tracing::warn!("No menu data provided");
            return RecommendationResult::empty(
                RecommendationStage::EmptyMenu,
                format!("No menu data available for table {}", table),
            );
        }

        // 2. Exact matches
        let matches = exact_matches(&input.menu, &query.tokens, top_k);
        if !matches.is_empty() {
            tracing::info!("Found {} exact matches", matches.len());
            return RecommendationResult::from_items(
                RecommendationStage::ExactMatch,
                matches,
                format!("Here are the matching dishes for table {}", table),
            );
        }

        // 3. Classify and filter candidates
        let category = classify(&query.cleaned);
        let candidates = category.candidates(&input.menu);
        tracing::debug!(
            category = category.label(),
            candidates = candidates.len(),
            "Classified query"
        );

        // 4. Semantic ranking
        if !candidates.is_empty() {
            match rank(&self.embedding_client, &candidates, &query.cleaned, &self.config).await {
                Ok(ranked) if !ranked.is_empty() => {
                    tracing::info!("Found {} similar matches", ranked.len());
                    return RecommendationResult::from_items(
                        RecommendationStage::Semantic,
                        ranked,
                        suggestion_message(category, &table),
                    )
                    .with_category(category);
                }
                Ok(_) => {
                    tracing::debug!("No candidate reached the similarity threshold");
                }
                Err(e) => {
                    tracing::error!("Error processing embeddings: {}", e);
                    return RecommendationResult::empty(
                        RecommendationStage::EmbeddingFailed,
                        format!("Error processing recommendations: {}", e),
                    )
                    .with_category(category);
                }
            }
        }

        // 5. Fallback
        let fallback: Vec<_> = category
            .fallback_candidates(&input.menu)
            .into_iter()
            .take(top_k)
            .collect();
        if !fallback.is_empty() {
            tracing::info!("Fallback to {} dishes", fallback.len());
            return RecommendationResult::from_items(
                RecommendationStage::Fallback,
                fallback,
                suggestion_message(category, &table),
            )
            .with_category(category);
        }

        tracing::warn!("No recommendations found");
        RecommendationResult::empty(
            RecommendationStage::NoMatch,
            format!("Sorry, we couldn't find any dishes for table {}", table),
        )
        .with_category(category)
    }
}
