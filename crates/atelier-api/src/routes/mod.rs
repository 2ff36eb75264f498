//! Route definitions, one module per resource.

pub mod admission;
pub mod alumni;
pub mod auth;
pub mod banner;
pub mod certificate;
pub mod contact;
pub mod course;
pub mod enquiry;
pub mod exam;
pub mod founder;
pub mod gallery;
pub mod gallery_folder;
pub mod health;
pub mod marksheet;
pub mod staff;
pub mod student;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admission        create, list, get, delete, approve
/// /enquiry          create, list, get, delete, approve (+ promotion)
/// /contact          create, list, get, delete, approve
/// /banner           create, list, get, replace image
/// /staff            create, list, get, update, delete
/// /founder          create, list, get, update, delete
/// /alumni           create, list, get, update, delete
/// /course           create, list, get, update, delete
/// /gallery          create, flat list, delete single image
/// /gallery-folder   create, list, get, update, delete
/// /upload           standalone image upload
/// /student          create, list, search, get, update, delete
/// /certificate      primary and second-copy renders
/// /marksheet        create, list, get, update, delete, print
/// /exam             create, list, search, get, update, delete
/// /auth             register, login, logout, profile, change-password
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admission", admission::router())
        .nest("/enquiry", enquiry::router())
        .nest("/contact", contact::router())
        .nest("/banner", banner::router())
        .nest("/staff", staff::router())
        .nest("/founder", founder::router())
        .nest("/alumni", alumni::router())
        .nest("/course", course::router())
        .nest("/gallery", gallery::router())
        .nest("/gallery-folder", gallery_folder::router())
        .nest("/upload", upload::router())
        .nest("/student", student::router())
        .nest("/certificate", certificate::router())
        .nest("/marksheet", marksheet::router())
        .nest("/exam", exam::router())
        .nest("/auth", auth::router())
}
