use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub top_k: usize,
    pub similarity_threshold: f32,
    pub embedding_model: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = state.service.config();

    Json(ConfigResponse {
        top_k: config.top_k,
        similarity_threshold: config.similarity_threshold,
        embedding_model: state.args.embedding.model.clone(),
    })
}
