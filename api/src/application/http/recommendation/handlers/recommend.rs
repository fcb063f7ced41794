use axum::extract::State;
use menuwise_core::domain::recommendation::{
    entities::{Recommendation, RecommendationResult},
    ports::RecommendationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::RecommendRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    pub message: String,
}

impl From<RecommendationResult> for RecommendResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            recommendations: result.recommendations,
            message: result.message,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Recommend dishes",
    description = "Suggests up to three dishes from the supplied menu for a free-text request. Every outcome, including no match, is returned with status 200 and an explanatory message.",
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload failed validation")
    ),
    request_body = RecommendRequest
)]
pub async fn recommend(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendRequest>,
) -> Result<Response<RecommendResponse>, ApiError> {
    tracing::info!(
        table_id = ?payload.table_id,
        menu_data_length = payload.menu_data.len(),
        "Received recommendation request"
    );

    let result = state.service.recommend(payload.into()).await;

    Ok(Response::OK(RecommendResponse::from(result)))
}
