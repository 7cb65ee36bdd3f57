use std::sync::Arc;

use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::json;
use sqlx::PgPool;

use crate::http_error::AppError;
use crate::plugins::blogs::form::{coerce_bool_flag, text_override, BlogForm};
use crate::plugins::blogs::models::{BlogDto, BlogPatch, NewBlog};
use crate::plugins::blogs::repo;
use crate::plugins::blogs::uploads::UploadStore;

// The legacy API answered create-validation failures with 404, and a
// get-by-id miss with 400. Both are kept as-is for client compatibility.

pub async fn create_blog(
    Extension(pool): Extension<PgPool>,
    Extension(uploads): Extension<Arc<UploadStore>>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let form = BlogForm::from_multipart(multipart).await?;

    let show_on_screen = coerce_bool_flag(form.show_on_screen.as_deref(), false);

    let title = form.title.unwrap_or_default();
    let description = form.description.unwrap_or_default();
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(AppError::new(StatusCode::NOT_FOUND, "Title and description is required"));
    }

    let image = match form.image {
        Some(image) => image,
        None => return Err(AppError::new(StatusCode::NOT_FOUND, "Image is required")),
    };
    let image_path = uploads.save(&image.filename, &image.bytes).await?;

    let blog = repo::insert_blog(
        &pool,
        NewBlog { title, description, image: image_path, show_on_screen },
    )
    .await?;

    Ok(Json(json!({ "blog": blog })))
}

pub async fn list_blogs(Extension(pool): Extension<PgPool>) -> Result<Json<Vec<BlogDto>>, AppError> {
    let blogs = repo::list_blogs(&pool).await?;
    Ok(Json(blogs))
}

pub async fn get_blog(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<BlogDto>, AppError> {
    match repo::get_blog(&pool, id).await? {
        Some(blog) => Ok(Json(blog)),
        None => Err(AppError::new(
            StatusCode::BAD_REQUEST,
            format!("Blog not found with this id{}", id),
        )),
    }
}

pub async fn update_blog(
    Extension(pool): Extension<PgPool>,
    Extension(uploads): Extension<Arc<UploadStore>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let form = BlogForm::from_multipart(multipart).await?;

    let current = match repo::get_blog(&pool, id).await? {
        Some(blog) => blog,
        None => return Err(AppError::new(StatusCode::NOT_FOUND, "Blog not exist")),
    };

    // absent flag keeps the stored value, unlike create's false default
    let show_on_screen = coerce_bool_flag(form.show_on_screen.as_deref(), current.show_on_screen);

    let image = match form.image {
        Some(image) => Some(uploads.save(&image.filename, &image.bytes).await?),
        None => None,
    };

    let patch = BlogPatch {
        title: text_override(form.title),
        description: text_override(form.description),
        image,
        show_on_screen: Some(show_on_screen),
    };

    match repo::update_blog(&pool, id, patch).await? {
        Some(updated) => Ok(Json(json!({
            "message": "Blog updated successfully",
            "updatedBlog": updated,
        }))),
        None => Err(AppError::new(StatusCode::NOT_FOUND, "Blog not exist")),
    }
}

pub async fn delete_blog(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if repo::delete_blog(&pool, id).await? {
        Ok(Json(json!({ "message": "Blog deleted successfully" })))
    } else {
        Err(AppError::new(StatusCode::NOT_FOUND, "Blog not exist"))
    }
}
