use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, routing::post, Extension, Router};
use sqlx::PgPool;

use crate::kernel::Plugin;
use crate::plugins::blogs::handlers::*;
use crate::plugins::blogs::uploads::UploadStore;

/// Upload cap carried over from the legacy service (10 MB per request).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct BlogsPlugin {
    pool: PgPool,
    uploads: Arc<UploadStore>,
}

impl BlogsPlugin {
    pub fn new(pool: PgPool, uploads: Arc<UploadStore>) -> Self {
        Self { pool, uploads }
    }
}

#[async_trait::async_trait]
impl Plugin for BlogsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/create", post(create_blog))
            .route("/", get(list_blogs))
            .route("/:id", get(get_blog).put(update_blog).delete(delete_blog))
            .layer(Extension(self.pool.clone()))
            .layer(Extension(self.uploads.clone()))
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
    }

    fn name(&self) -> &'static str {
        "blogs"
    }
}
