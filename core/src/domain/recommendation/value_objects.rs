use crate::domain::recommendation::entities::MenuItem;

#[derive(Debug, Clone)]
pub struct RecommendInput {
    pub user_input: String,
    pub menu: Vec<MenuItem>,
    pub table_id: Option<String>,
}

impl RecommendInput {
    /// Table label echoed in status messages.
    pub fn table_label(&self) -> &str {
        match self.table_id.as_deref() {
            Some(table_id) if !table_id.is_empty() => table_id,
            _ => "unknown",
        }
    }
}

/// Query text after lowercasing, trimming and stop-word removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub text: String,
    pub tokens: Vec<String>,
    pub cleaned: String,
}
