//! Request extractors that reject into the standard error envelope.

use std::collections::HashMap;

use axum::extract::multipart::Multipart;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Json<T>` with rejections mapped into the `{"result": 0}` envelope.
///
/// Axum's stock `Json` rejection replies with a plain-text body and 422 for
/// deserialization failures; the API contract wants 400 and the shared
/// envelope for every malformed body.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// One uploaded file from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, used to pick the stored extension.
    pub file_name: String,
    /// Declared MIME type (falls back to `application/octet-stream`).
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A fully buffered multipart form.
///
/// Collects every part up front so handlers can check required fields before
/// any upload starts. Parts with a non-empty client file name are files;
/// everything else is text. Both kinds may repeat under one name
/// (`document`, `galleryImages`, `imagesToRemove`).
#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    /// Drain a multipart stream into memory.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            let is_file = field.file_name().is_some_and(|f| !f.is_empty());
            if is_file {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();
                form.files.entry(name).or_default().push(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.texts.entry(name).or_default().push(text);
            }
        }

        Ok(form)
    }

    /// First value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First value of a text field, or an owned empty string.
    ///
    /// Lets handlers build a DTO in one expression and leave presence
    /// checks to the DTO's validator.
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// All values of a repeated text field.
    pub fn texts(&self, name: &str) -> &[String] {
        self.texts.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether at least one file arrived under `name`.
    pub fn has_file(&self, name: &str) -> bool {
        self.files.get(name).is_some_and(|files| !files.is_empty())
    }

    /// Remove and return the first file uploaded under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        let files = self.files.get_mut(name)?;
        if files.is_empty() {
            return None;
        }
        Some(files.remove(0))
    }

    /// Remove and return every file uploaded under `name`.
    pub fn take_files(&mut self, name: &str) -> Vec<UploadedFile> {
        self.files.remove(name).unwrap_or_default()
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Self::read(multipart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormData {
        let mut form = FormData::default();
        form.texts
            .insert("name".to_string(), vec!["Mira".to_string()]);
        form.texts.insert(
            "images_to_remove".to_string(),
            vec!["https://a/1.png".to_string(), "https://a/2.png".to_string()],
        );
        form.files.insert(
            "galleryImages".to_string(),
            vec![
                UploadedFile {
                    file_name: "a.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![1],
                },
                UploadedFile {
                    file_name: "b.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![2],
                },
            ],
        );
        form
    }

    #[test]
    fn text_fields_return_first_value() {
        let form = sample_form();
        assert_eq!(form.text("name"), Some("Mira"));
        assert_eq!(form.text("missing"), None);
        assert_eq!(form.text_or_default("missing"), "");
    }

    #[test]
    fn repeated_text_fields_keep_order() {
        let form = sample_form();
        let urls = form.texts("images_to_remove");
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://a/1.png");
    }

    #[test]
    fn take_file_pops_in_upload_order() {
        let mut form = sample_form();
        assert!(form.has_file("galleryImages"));
        let first = form.take_file("galleryImages").expect("one file");
        assert_eq!(first.file_name, "a.png");
        let rest = form.take_files("galleryImages");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].file_name, "b.png");
        assert!(!form.has_file("galleryImages"));
    }
}
