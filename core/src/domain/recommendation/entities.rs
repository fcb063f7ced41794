use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish as supplied by the caller for a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub name: String,
    pub tags: String,
    pub category: String,
    pub short_description: String,
    pub full_description: String,
    pub price: String,
}

impl MenuItem {
    pub fn tags_lowercase(&self) -> String {
        self.tags.to_lowercase()
    }

    pub fn category_lowercase(&self) -> String {
        self.category.to_lowercase()
    }

    /// Text handed to the embedding model for this item.
    pub fn composite_text(&self) -> String {
        format!("{} {} {}", self.name, self.tags, self.full_description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl From<&MenuItem> for Recommendation {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.short_description.clone(),
            price: item.price.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Drinks,
    Desserts,
    SpicyDishes,
    VegetableDishes,
    RiceDishes,
    Noodles,
    Soups,
    JapaneseDishes,
    None,
}

impl SuggestionCategory {
    /// Human readable label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionCategory::Drinks => "drinks",
            SuggestionCategory::Desserts => "desserts",
            SuggestionCategory::SpicyDishes => "spicy dishes",
            SuggestionCategory::VegetableDishes => "vegetable dishes",
            SuggestionCategory::RiceDishes => "rice dishes",
            SuggestionCategory::Noodles => "noodles",
            SuggestionCategory::Soups => "soups",
            SuggestionCategory::JapaneseDishes => "japanese dishes",
            SuggestionCategory::None => "dishes",
        }
    }
}

/// Which pipeline stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStage {
    EmptyQuery,
    EmptyMenu,
    ExactMatch,
    Semantic,
    Fallback,
    EmbeddingFailed,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub message: String,
    pub stage: RecommendationStage,
    pub category: Option<SuggestionCategory>,
}

impl RecommendationResult {
    pub fn empty(stage: RecommendationStage, message: String) -> Self {
        Self {
            recommendations: Vec::new(),
            message,
            stage,
            category: None,
        }
    }

    pub fn from_items<'a, I>(stage: RecommendationStage, items: I, message: String) -> Self
    where
        I: IntoIterator<Item = &'a MenuItem>,
    {
        Self {
            recommendations: items.into_iter().map(Recommendation::from).collect(),
            message,
            stage,
            category: None,
        }
    }

    pub fn with_category(mut self, category: SuggestionCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
