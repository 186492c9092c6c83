//! Category provisioning and listing.
//!
//! Categories are found by exact name or created on demand. New categories
//! get a color and icon by indexing fixed palettes with the total category
//! count at creation time. The index is the raw count, not the number of
//! distinct colors in use, so colors repeat once the store holds more
//! categories than palette entries.

use crate::{
    entities::{Category, category},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Fixed color palette cycled through when provisioning categories.
pub const CATEGORY_COLORS: [&str; 10] = [
    "#e74c3c", "#3498db", "#9b59b6", "#f39c12", "#e67e22", "#27ae60", "#95a5a6", "#34495e",
    "#1abc9c", "#8e44ad",
];

/// Fixed icon palette cycled through when provisioning categories.
pub const CATEGORY_ICONS: [&str; 11] = [
    "fas fa-utensils",
    "fas fa-car",
    "fas fa-gamepad",
    "fas fa-shopping-bag",
    "fas fa-home",
    "fas fa-dumbbell",
    "fas fa-bus",
    "fas fa-graduation-cap",
    "fas fa-plane",
    "fas fa-users",
    "fas fa-circle",
];

/// A category as listed over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRecord {
    /// Row id
    pub id: i64,
    /// Category name
    pub name: String,
    /// Display color
    pub color: String,
    /// Display icon class
    pub icon: String,
    /// Optional description
    pub description: Option<String>,
}

/// Resolves a category by exact name, creating it if absent.
///
/// Runs against any connection so callers can place the lookup-and-insert
/// inside their own transaction. Calling twice with the same name returns
/// the same row; an existing category's color and icon are never touched.
pub async fn get_or_create_category<C>(db: &C, name: &str) -> Result<category::Model>
where
    C: ConnectionTrait,
{
    if let Some(existing) = Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    let count = usize::try_from(Category::find().count(db).await?).unwrap_or(usize::MAX);
    let model = category::ActiveModel {
        name: Set(name.to_string()),
        color: Set(CATEGORY_COLORS[count % CATEGORY_COLORS.len()].to_string()),
        icon: Set(CATEGORY_ICONS[count % CATEGORY_ICONS.len()].to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Lists all categories in creation order.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<CategoryRecord>> {
    let categories = Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;

    Ok(categories
        .into_iter()
        .map(|c| CategoryRecord {
            id: c.id,
            name: c.name,
            color: c.color,
            icon: c.icon,
            description: c.description,
        })
        .collect())
}
