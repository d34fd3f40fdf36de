//! Category entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// A category grouping posts, displayed with its color swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Hex color string, e.g. `#3B82F6`.
    pub color: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a category.
///
/// The slug is derived by the service before the insert; id and `created_at`
/// are generated by the datastore.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub color: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_fields() {
        let new_category = NewCategory {
            name: "Rust Tips".to_string(),
            description: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            slug: "rust-tips".to_string(),
        };

        assert_eq!(new_category.color, "#3B82F6");
        assert!(new_category.description.is_empty());
    }
}
