use crate::application::http::{
    health::HealthApiDoc, recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menuwise API"
    ),
    nest(
        (path = "/recommend", api = RecommendationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
