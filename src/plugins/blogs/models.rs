use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Wire representation of a blog row. Field names follow the legacy
/// camelCase API (`showOnScreen`, `createdAt`, `updatedAt`).
#[derive(Serialize, Deserialize, Debug, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub show_on_screen: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Validated input for an insert. `image` is the stored public path, never
/// raw upload bytes.
#[derive(Debug)]
pub struct NewBlog {
    pub title: String,
    pub description: String,
    pub image: String,
    pub show_on_screen: bool,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub show_on_screen: Option<bool>,
}
