use crate::domain::recommendation::entities::MenuItem;

/// True when any token appears inside the item's name, tags or category.
pub fn is_exact_match(item: &MenuItem, tokens: &[String]) -> bool {
    let name = item.name.to_lowercase();
    let tags = item.tags_lowercase();
    let category = item.category_lowercase();

    tokens.iter().any(|token| {
        name.contains(token.as_str())
            || tags.contains(token.as_str())
            || category.contains(token.as_str())
    })
}

/// Exact matches in menu order, capped at `top_k`.
pub fn exact_matches<'a>(menu: &'a [MenuItem], tokens: &[String], top_k: usize) -> Vec<&'a MenuItem> {
    if tokens.is_empty() {
        return Vec::new();
    }

    menu.iter()
        .filter(|item| is_exact_match(item, tokens))
        .take(top_k)
        .collect()
}
