//! Folder layout and key derivation for stored assets.
//!
//! Every asset lives under a fixed per-entity folder. The folder paths and
//! the URL-to-public-id parsing are load-bearing: rows store only the public
//! URL, and destroys re-derive the provider id by taking the URL's last path
//! segment up to its first dot and prepending the entity folder.

use uuid::Uuid;

/// Root folder shared by all entity folders.
pub const ROOT: &str = "atelier_data";

/// Banner images, grouped per banner type.
pub fn banner(banner_type: &str) -> String {
    format!("{ROOT}/banner/{banner_type}")
}

pub fn staff_images() -> String {
    format!("{ROOT}/staff_images")
}

pub fn founder_images() -> String {
    format!("{ROOT}/founder_images")
}

pub fn alumni_images() -> String {
    format!("{ROOT}/alumni_images")
}

pub fn course_banners() -> String {
    format!("{ROOT}/course_banners")
}

pub fn admission_photos() -> String {
    format!("{ROOT}/admission_photos")
}

pub fn admission_documents() -> String {
    format!("{ROOT}/admission_documents")
}

/// Destination of the standalone `/api/upload` endpoint.
pub fn gallery_uploads() -> String {
    format!("{ROOT}/gallery")
}

/// Cover image folder of a named gallery folder.
pub fn gallery_folder(folder_title: &str) -> String {
    format!("{ROOT}/gallery_folder/{folder_title}")
}

/// Member images of a named gallery folder.
pub fn gallery_folder_images(folder_title: &str) -> String {
    format!("{ROOT}/gallery_folder/{folder_title}/images")
}

/// Generate a fresh object key inside `folder`.
///
/// Returns `(key, public_id)`: the key is `folder/<uuid>.<ext>`, the public
/// id is the same path without the extension.
pub fn new_object_key(folder: &str, file_name: &str, content_type: &str) -> (String, String) {
    let stem = Uuid::new_v4().to_string();
    let ext = extension_for(file_name, content_type);
    (
        format!("{folder}/{stem}.{ext}"),
        format!("{folder}/{stem}"),
    )
}

/// Re-derive a provider public id from a stored URL.
///
/// Takes the last `/`-separated segment of the URL, truncates it at the
/// first `.`, and prepends `folder`. Mirrors how the URLs produced by
/// [`new_object_key`] are laid out; URLs from other sources may not
/// round-trip.
pub fn public_id_from_url(folder: &str, url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or(url);
    let stem = last.split('.').next().unwrap_or(last);
    format!("{folder}/{stem}")
}

/// Pick a file extension from the client file name, falling back to the
/// declared content type.
fn extension_for(file_name: &str, content_type: &str) -> String {
    if let Some((_, ext)) = file_name.rsplit_once('.') {
        let ext = ext.to_ascii_lowercase();
        if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return ext;
        }
    }
    match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "application/pdf" => "pdf",
        _ => "bin",
    }
    .to_string()
}
