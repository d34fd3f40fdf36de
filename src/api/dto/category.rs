//! DTOs for category endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Category;
use crate::utils::validation::HEX_COLOR;

/// Request body for `POST /api/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Defaults to an empty string.
    pub description: Option<String>,

    /// Hex color, defaults to `#3B82F6`.
    #[validate(regex(path = *HEX_COLOR, message = "Color must be a hex color like #3B82F6"))]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub color: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            color: c.color,
            slug: c.slug,
            created_at: c.created_at,
        }
    }
}

/// Response for `GET /api/categories`, ordered by name.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_absent() {
        let req: CreateCategoryRequest = serde_json::from_value(json!({"name": "News"})).unwrap();

        assert!(req.description.is_none());
        assert!(req.color.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let req: CreateCategoryRequest = serde_json::from_value(json!({"name": ""})).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_bad_color_fails_validation() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({"name": "News", "color": "blue"})).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("color"));
    }
}
