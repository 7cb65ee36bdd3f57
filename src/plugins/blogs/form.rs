use axum::body::Bytes;
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::http_error::AppError;

pub struct UploadedImage {
    pub filename: String,
    pub bytes: Bytes,
}

/// Raw multipart fields of a create/update request, drained in full before
/// any validation so the connection is never left mid-stream.
#[derive(Default)]
pub struct BlogForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub show_on_screen: Option<String>,
    pub image: Option<UploadedImage>,
}

impl BlogForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = BlogForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, format!("multipart error: {}", e)))?
        {
            let name = field.name().map(|s| s.to_string());
            match name.as_deref() {
                Some("title") => form.title = Some(read_text(field).await?),
                Some("description") => form.description = Some(read_text(field).await?),
                Some("showOnScreen") => form.show_on_screen = Some(read_text(field).await?),
                Some("image") => {
                    let filename = field.file_name().unwrap_or("upload.bin").to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::new(StatusCode::BAD_REQUEST, format!("multipart read error: {}", e))
                    })?;
                    form.image = Some(UploadedImage { filename, bytes });
                }
                // unknown fields are ignored
                _ => {}
            }
        }

        Ok(form)
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, format!("multipart read error: {}", e)))
}

/// Boolean coercion used by the legacy form API: only the literal string
/// `"true"` turns the flag on; any other supplied value turns it off; an
/// absent field falls back to `default_if_absent`.
pub fn coerce_bool_flag(raw: Option<&str>, default_if_absent: bool) -> bool {
    match raw {
        None => default_if_absent,
        Some(s) => s == "true",
    }
}

/// Update-merge rule for title/description: a supplied value only overrides
/// the stored one when it has content. Empty values are silently dropped
/// rather than rejected, which the legacy API relied on.
pub fn text_override(supplied: Option<String>) -> Option<String> {
    supplied.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_bool_flag_absent_uses_default() {
        assert!(!coerce_bool_flag(None, false));
        assert!(coerce_bool_flag(None, true));
    }

    #[test]
    fn coerce_bool_flag_only_literal_true_is_true() {
        assert!(coerce_bool_flag(Some("true"), false));
        assert!(!coerce_bool_flag(Some("false"), true));
        assert!(!coerce_bool_flag(Some("yes"), true));
        assert!(!coerce_bool_flag(Some("TRUE"), true));
        assert!(!coerce_bool_flag(Some(""), true));
    }

    #[test]
    fn text_override_keeps_stored_value_for_empty_input() {
        assert_eq!(text_override(None), None);
        assert_eq!(text_override(Some(String::new())), None);
        assert_eq!(text_override(Some("   ".to_string())), None);
    }

    #[test]
    fn text_override_passes_real_values_through() {
        assert_eq!(text_override(Some("New title".to_string())), Some("New title".to_string()));
    }
}
