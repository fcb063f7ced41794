use crate::domain::recommendation::entities::{MenuItem, SuggestionCategory};

const JAPANESE_TAGS: &[&str] = &["japanese", "sushi", "yakiniku", "ramen"];

/// Trigger words per category, checked in this order. The first hit wins.
pub const CATEGORY_TRIGGERS: &[(SuggestionCategory, &[&str])] = &[
    (SuggestionCategory::Drinks, &["coffee", "tea", "drink", "water"]),
    (
        SuggestionCategory::Desserts,
        &[
            "cake",
            "chocolate",
            "ice cream",
            "dessert",
            "sweet",
            "brownie",
            "pudding",
        ],
    ),
    (
        SuggestionCategory::SpicyDishes,
        &["spicy", "chili", "herbs", "thai"],
    ),
    (SuggestionCategory::VegetableDishes, &["vegetables", "big"]),
    (SuggestionCategory::RiceDishes, &["rice", "fried rice"]),
    (SuggestionCategory::Noodles, &["noodle", "pasta"]),
    (SuggestionCategory::Soups, &["soup", "curry"]),
    (SuggestionCategory::JapaneseDishes, JAPANESE_TAGS),
];

/// Pick the suggestion category for a cleaned query.
pub fn classify(cleaned: &str) -> SuggestionCategory {
    CATEGORY_TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|trigger| cleaned.contains(trigger)))
        .map(|(category, _)| *category)
        .unwrap_or(SuggestionCategory::None)
}

/// A predicate over a single menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    CategoryContains(&'static [&'static str]),
    CategoryEquals(&'static [&'static str]),
    TagsContain(&'static [&'static str]),
    TagsContainAndCategoryContains {
        tag: &'static str,
        categories: &'static [&'static str],
    },
    TagsContainAndCategoryEquals {
        tag: &'static str,
        categories: &'static [&'static str],
    },
    TagsOrCategoryEquals {
        tags: &'static [&'static str],
        category: &'static str,
    },
}

impl ItemFilter {
    pub fn accepts(&self, item: &MenuItem) -> bool {
        match *self {
            ItemFilter::CategoryContains(labels) => {
                let category = item.category_lowercase();
                labels.iter().any(|label| category.contains(label))
            }
            ItemFilter::CategoryEquals(labels) => {
                let category = item.category_lowercase();
                labels.iter().any(|label| category == *label)
            }
            ItemFilter::TagsContain(tags) => {
                let item_tags = item.tags_lowercase();
                tags.iter().any(|tag| item_tags.contains(tag))
            }
            ItemFilter::TagsContainAndCategoryContains { tag, categories } => {
                item.tags_lowercase().contains(tag)
                    && ItemFilter::CategoryContains(categories).accepts(item)
            }
            ItemFilter::TagsContainAndCategoryEquals { tag, categories } => {
                item.tags_lowercase().contains(tag)
                    && ItemFilter::CategoryEquals(categories).accepts(item)
            }
            ItemFilter::TagsOrCategoryEquals { tags, category } => {
                ItemFilter::TagsContain(tags).accepts(item)
                    || item.category_lowercase() == category
            }
        }
    }

    fn select<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        menu.iter().filter(|item| self.accepts(item)).collect()
    }
}

/// A candidate selection rule over the whole request menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateRule {
    Nothing,
    Filter(ItemFilter),
    /// Use `primary`, or `secondary` when `primary` selects nothing.
    Tiered {
        primary: ItemFilter,
        secondary: ItemFilter,
    },
}

impl CandidateRule {
    /// Apply the rule to a menu, keeping menu order.
    pub fn select<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        match self {
            CandidateRule::Nothing => Vec::new(),
            CandidateRule::Filter(filter) => filter.select(menu),
            CandidateRule::Tiered { primary, secondary } => {
                let selected = primary.select(menu);
                if selected.is_empty() {
                    secondary.select(menu)
                } else {
                    selected
                }
            }
        }
    }
}

const VEGETABLE_FILTER: CandidateRule = CandidateRule::Tiered {
    primary: ItemFilter::CategoryEquals(&["vegetable dishes"]),
    secondary: ItemFilter::TagsContainAndCategoryContains {
        tag: "vegetables",
        categories: &["vegetable dishes", "main dish", "rice dishes", "curry & soup"],
    },
};

const VEGETABLE_FALLBACK: CandidateRule = CandidateRule::Tiered {
    primary: ItemFilter::CategoryEquals(&["vegetable dishes"]),
    secondary: ItemFilter::TagsContainAndCategoryEquals {
        tag: "vegetables",
        categories: &["main dish", "rice dishes", "curry & soup"],
    },
};

const JAPANESE_RULE: CandidateRule = CandidateRule::Filter(ItemFilter::TagsOrCategoryEquals {
    tags: JAPANESE_TAGS,
    category: "japanese dishes",
});

impl SuggestionCategory {
    /// Rule selecting the candidates handed to the semantic ranker.
    pub fn filter_rule(&self) -> CandidateRule {
        match self {
            SuggestionCategory::Drinks => {
                CandidateRule::Filter(ItemFilter::CategoryContains(&["drinks", "beverage"]))
            }
            SuggestionCategory::Desserts => {
                CandidateRule::Filter(ItemFilter::CategoryContains(&["dessert"]))
            }
            SuggestionCategory::SpicyDishes => CandidateRule::Filter(ItemFilter::CategoryContains(&[
                "main dish",
                "spicy basil",
                "curry & soup",
                "rice dishes",
            ])),
            SuggestionCategory::VegetableDishes => VEGETABLE_FILTER,
            SuggestionCategory::RiceDishes => {
                CandidateRule::Filter(ItemFilter::CategoryContains(&["rice", "main dish"]))
            }
            SuggestionCategory::Noodles => {
                CandidateRule::Filter(ItemFilter::CategoryContains(&["noodle", "pasta"]))
            }
            SuggestionCategory::Soups => {
                CandidateRule::Filter(ItemFilter::CategoryContains(&["soup", "curry"]))
            }
            SuggestionCategory::JapaneseDishes => JAPANESE_RULE,
            SuggestionCategory::None => CandidateRule::Nothing,
        }
    }

    /// Rule used when semantic ranking yields nothing. Specified per category,
    /// not derived from `filter_rule`.
    pub fn fallback_rule(&self) -> CandidateRule {
        match self {
            SuggestionCategory::Drinks => {
                CandidateRule::Filter(ItemFilter::CategoryEquals(&["drinks", "beverage"]))
            }
            SuggestionCategory::Desserts => {
                CandidateRule::Filter(ItemFilter::CategoryEquals(&["dessert"]))
            }
            SuggestionCategory::SpicyDishes => {
                CandidateRule::Filter(ItemFilter::TagsContain(&[
                    "spicy", "chili", "herbs", "basil", "thai",
                ]))
            }
            SuggestionCategory::VegetableDishes => VEGETABLE_FALLBACK,
            SuggestionCategory::JapaneseDishes => JAPANESE_RULE,
            SuggestionCategory::RiceDishes
            | SuggestionCategory::Noodles
            | SuggestionCategory::Soups
            | SuggestionCategory::None => CandidateRule::Nothing,
        }
    }

    pub fn candidates<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        self.filter_rule().select(menu)
    }

    pub fn fallback_candidates<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        self.fallback_rule().select(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, tags: &str, category: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            tags: tags.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn names(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_classify_by_trigger() {
        assert_eq!(classify("iced coffee"), SuggestionCategory::Drinks);
        assert_eq!(classify("ice cream"), SuggestionCategory::Desserts);
        assert_eq!(classify("chili"), SuggestionCategory::SpicyDishes);
        assert_eq!(classify("big portion"), SuggestionCategory::VegetableDishes);
        assert_eq!(classify("fried rice"), SuggestionCategory::RiceDishes);
        assert_eq!(classify("pasta"), SuggestionCategory::Noodles);
        assert_eq!(classify("curry"), SuggestionCategory::Soups);
        assert_eq!(classify("yakiniku"), SuggestionCategory::JapaneseDishes);
        assert_eq!(classify("something nice"), SuggestionCategory::None);
        assert_eq!(classify(""), SuggestionCategory::None);
    }

    #[test]
    fn test_classify_priority_order() {
        // drinks beat desserts, spicy beats soups, rice beats japanese
        assert_eq!(classify("chocolate drink"), SuggestionCategory::Drinks);
        assert_eq!(classify("thai curry"), SuggestionCategory::SpicyDishes);
        assert_eq!(classify("sushi rice"), SuggestionCategory::RiceDishes);
    }

    #[test]
    fn test_classify_uses_substrings() {
        // "steak" contains "tea"
        assert_eq!(classify("steak"), SuggestionCategory::Drinks);
        assert_eq!(classify("noodles"), SuggestionCategory::Noodles);
    }

    #[test]
    fn test_default_filter_is_category_substring() {
        let menu = vec![
            item("Thai Iced Tea", "", "Hot & Cold Drinks"),
            item("Soda", "", "Beverages"),
            item("Cake", "", "Dessert"),
        ];

        let candidates = SuggestionCategory::Drinks.candidates(&menu);
        assert_eq!(names(&candidates), vec!["Thai Iced Tea", "Soda"]);
    }

    #[test]
    fn test_vegetable_filter_prefers_exact_category() {
        let menu = vec![
            item("Stir Fried Greens", "greens", "Vegetable Dishes"),
            item("Veggie Curry", "vegetables", "Curry & Soup"),
        ];

        let candidates = SuggestionCategory::VegetableDishes.candidates(&menu);
        assert_eq!(names(&candidates), vec!["Stir Fried Greens"]);
    }

    #[test]
    fn test_vegetable_filter_secondary_requires_tag() {
        let menu = vec![
            item("Garden Plate", "vegetables, healthy", "main dish"),
            item("Pork Rice", "pork", "Rice Dishes"),
            item("Veggie Noodles", "vegetables", "Noodle"),
        ];

        let candidates = SuggestionCategory::VegetableDishes.candidates(&menu);
        assert_eq!(names(&candidates), vec!["Garden Plate"]);
    }

    #[test]
    fn test_tiered_rule_checks_secondary_per_item() {
        let garden_plate = item("Garden Plate", "vegetables, healthy", "Main Dish");
        let CandidateRule::Tiered { primary, secondary } =
            SuggestionCategory::VegetableDishes.filter_rule()
        else {
            panic!("vegetable filter should be tiered");
        };

        assert!(!primary.accepts(&garden_plate));
        assert!(secondary.accepts(&garden_plate));
        assert_eq!(
            names(&SuggestionCategory::VegetableDishes.candidates(std::slice::from_ref(
                &garden_plate
            ))),
            vec!["Garden Plate"]
        );
    }

    #[test]
    fn test_vegetable_fallback_secondary_uses_category_equality() {
        let menu = vec![
            item("Veggie Special", "vegetables", "Main Dish Specials"),
            item("Garden Plate", "vegetables", "Main Dish"),
        ];

        let filter = SuggestionCategory::VegetableDishes.candidates(&menu);
        assert_eq!(names(&filter), vec!["Veggie Special", "Garden Plate"]);

        let fallback = SuggestionCategory::VegetableDishes.fallback_candidates(&menu);
        assert_eq!(names(&fallback), vec!["Garden Plate"]);
    }

    #[test]
    fn test_japanese_rule_is_union() {
        let menu = vec![
            item("Salmon Nigiri", "Sushi, raw", "Specials"),
            item("Gyoza", "dumplings", "Japanese Dishes"),
            item("Pho", "noodles", "Noodle"),
        ];

        let candidates = SuggestionCategory::JapaneseDishes.candidates(&menu);
        assert_eq!(names(&candidates), vec!["Salmon Nigiri", "Gyoza"]);
        assert_eq!(
            SuggestionCategory::JapaneseDishes.fallback_candidates(&menu),
            candidates
        );
    }

    #[test]
    fn test_spicy_fallback_widens_to_basil_tags() {
        let menu = vec![
            item("Holy Basil Stir Fry", "basil, garlic", "Stir Fry"),
            item("Plain Omelette", "egg", "Main Dish"),
        ];

        let filter = SuggestionCategory::SpicyDishes.candidates(&menu);
        assert_eq!(names(&filter), vec!["Plain Omelette"]);

        let fallback = SuggestionCategory::SpicyDishes.fallback_candidates(&menu);
        assert_eq!(names(&fallback), vec!["Holy Basil Stir Fry"]);
    }

    #[test]
    fn test_drinks_fallback_requires_exact_category() {
        let menu = vec![
            item("Soda", "", "Cold Beverages"),
            item("Water", "", "Beverage"),
        ];

        assert_eq!(SuggestionCategory::Drinks.candidates(&menu).len(), 2);
        assert_eq!(
            names(&SuggestionCategory::Drinks.fallback_candidates(&menu)),
            vec!["Water"]
        );
    }

    #[test]
    fn test_categories_without_fallback() {
        let menu = vec![
            item("Fried Rice", "", "Rice"),
            item("Ramen", "", "Noodle"),
            item("Tom Kha", "", "Soup"),
        ];

        for category in [
            SuggestionCategory::RiceDishes,
            SuggestionCategory::Noodles,
            SuggestionCategory::Soups,
            SuggestionCategory::None,
        ] {
            assert!(category.fallback_candidates(&menu).is_empty());
        }
        assert!(SuggestionCategory::None.candidates(&menu).is_empty());
    }
}
