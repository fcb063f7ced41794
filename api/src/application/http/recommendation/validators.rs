use menuwise_core::domain::recommendation::{entities::MenuItem, value_objects::RecommendInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "user_input must be at most 2000 characters"))]
    #[schema(example = "something spicy please")]
    pub user_input: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "menu_data must hold at most 1000 items"))]
    pub menu_data: Vec<MenuItemPayload>,

    #[validate(length(max = 64, message = "table_id must be at most 64 characters"))]
    #[schema(example = "A12")]
    pub table_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemPayload {
    #[serde(alias = "name_eng")]
    pub name: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    /// Display price, either a string or a number.
    #[serde(default, alias = "price_starts_at")]
    #[schema(value_type = String, example = "60")]
    pub price: Value,
}

fn render_price(price: &Value) -> String {
    match price {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<MenuItemPayload> for MenuItem {
    fn from(payload: MenuItemPayload) -> Self {
        let price = render_price(&payload.price);
        Self {
            name: payload.name,
            tags: payload.tags,
            category: payload.category,
            short_description: payload.short_description,
            full_description: payload.full_description,
            price,
        }
    }
}

impl From<RecommendRequest> for RecommendInput {
    fn from(request: RecommendRequest) -> Self {
        Self {
            user_input: request.user_input,
            menu: request.menu_data.into_iter().map(MenuItem::from).collect(),
            table_id: request.table_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_legacy_field_names() {
        let payload: MenuItemPayload = serde_json::from_value(json!({
            "name_eng": "Pad Thai",
            "price_starts_at": 60,
            "category": "Noodle"
        }))
        .unwrap();

        let item = MenuItem::from(payload);
        assert_eq!(item.name, "Pad Thai");
        assert_eq!(item.price, "60");
        assert_eq!(item.category, "Noodle");
        assert_eq!(item.tags, "");
    }

    #[test]
    fn test_renders_price_variants() {
        assert_eq!(render_price(&json!("฿80")), "฿80");
        assert_eq!(render_price(&json!(79.5)), "79.5");
        assert_eq!(render_price(&Value::Null), "");
    }

    #[test]
    fn test_validation_limits() {
        let request = RecommendRequest {
            user_input: "x".repeat(2001),
            menu_data: vec![],
            table_id: None,
        };
        assert!(request.validate().is_err());

        let request = RecommendRequest {
            user_input: String::new(),
            menu_data: vec![],
            table_id: Some("T1".to_string()),
        };
        assert!(request.validate().is_ok());
    }
}
