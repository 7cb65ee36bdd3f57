use sqlx::PgPool;

use crate::http_error::AppError;
use crate::plugins::blogs::models::{BlogDto, BlogPatch, NewBlog};

const RETURNING: &str = "id, title, description, image, show_on_screen, created_at, updated_at";

pub async fn insert_blog(pool: &PgPool, new: NewBlog) -> Result<BlogDto, AppError> {
    let dto = sqlx::query_as::<_, BlogDto>(&format!(
        "INSERT INTO blogs (title, description, image, show_on_screen) VALUES ($1,$2,$3,$4) RETURNING {}",
        RETURNING
    ))
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.image)
    .bind(new.show_on_screen)
    .fetch_one(pool)
    .await
    .map_err(AppError::from)?;
    Ok(dto)
}

pub async fn list_blogs(pool: &PgPool) -> Result<Vec<BlogDto>, AppError> {
    let items = sqlx::query_as::<_, BlogDto>(&format!(
        "SELECT {} FROM blogs ORDER BY created_at DESC",
        RETURNING
    ))
    .fetch_all(pool)
    .await
    .map_err(AppError::from)?;
    Ok(items)
}

/// `None` means no row with that id; a missing record is an expected
/// outcome, not a fault.
pub async fn get_blog(pool: &PgPool, id: i32) -> Result<Option<BlogDto>, AppError> {
    let dto = sqlx::query_as::<_, BlogDto>(&format!("SELECT {} FROM blogs WHERE id = $1", RETURNING))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)?;
    Ok(dto)
}

/// Single-statement merge: COALESCE keeps the stored value for every `None`
/// in the patch, and `updated_at` is re-stamped. Last write wins under
/// concurrent updates.
pub async fn update_blog(pool: &PgPool, id: i32, patch: BlogPatch) -> Result<Option<BlogDto>, AppError> {
    let dto = sqlx::query_as::<_, BlogDto>(&format!(
        "UPDATE blogs SET title = COALESCE($1, title), description = COALESCE($2, description), \
         image = COALESCE($3, image), show_on_screen = COALESCE($4, show_on_screen), updated_at = now() \
         WHERE id = $5 RETURNING {}",
        RETURNING
    ))
    .bind(patch.title)
    .bind(patch.description)
    .bind(patch.image)
    .bind(patch.show_on_screen)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from)?;
    Ok(dto)
}

/// Hard delete. Returns `false` when no row matched.
pub async fn delete_blog(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::from)?;
    Ok(result.rows_affected() > 0)
}
