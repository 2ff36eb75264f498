//! Integration tests asserting that invalid create payloads return 400 with
//! the error envelope and persist nothing, neither rows nor stored objects.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_storage, get, post_json, post_multipart,
    MultipartForm,
};
use serde_json::json;
use sqlx::PgPool;

use atelier_storage::MemoryStorage;

// ---------------------------------------------------------------------------
// Test: enquiry with a bad phone number is rejected and not persisted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn invalid_enquiry_returns_400_and_persists_nothing(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/enquiry/new-enquiry",
        json!({
            "name": "Asha Verma",
            "email": "asha@example.test",
            "phone_number": "12345",
            "profile": "Student",
            "select_course": "Fashion Design",
            "select_state": "Karnataka",
            "district": "Bengaluru Urban",
            "city": "Bengaluru",
            "message": "Interested in the next batch."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["result"], 0);
    assert_eq!(json["message"], "Phone number must be 10 digits");

    // The empty table surfaces as a 404 from the list endpoint.
    let response = get(app, "/api/enquiry/all-enquiry").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: invalid admission rejects before any file touches storage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn invalid_admission_uploads_nothing(pool: PgPool) {
    let storage = Arc::new(MemoryStorage::new());
    let app = build_test_app_with_storage(pool, storage.clone());

    let form = MultipartForm::new()
        .text("name", "Asha Verma")
        .text("email", "not-an-email")
        .text("phone_number", "9876543210")
        .text("profile", "Student")
        .text("select_course", "Fashion Design")
        .text("select_state", "Karnataka")
        .text("district", "Bengaluru Urban")
        .text("city", "Bengaluru")
        .text("message", "Please consider my application.")
        .file("photo", "me.jpg", "image/jpeg", b"fake-jpeg-bytes");

    let response = post_multipart(app.clone(), "/api/admission/new-admission", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Please enter a valid email address");

    // Validation happens before the upload step, so storage stays empty.
    assert_eq!(storage.object_count(), 0);

    let response = get(app, "/api/admission/all-admission").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: contact with an invalid email is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn invalid_contact_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/contact/new-contact",
        json!({
            "name": "Ravi",
            "email": "nope",
            "phone_number": "9876543210",
            "message": "Hello"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/contact/all-contact").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: student with an empty required field is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn student_with_empty_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/student/new-student",
        json!({
            "certificate_no": "C-100",
            "enrollment_id": "EN-100",
            "name": "",
            "father_name": "Suresh",
            "course": "Interior Design",
            "duration": "1 year",
            "date": "2026-06-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["result"], 0);
    assert_eq!(json["message"], "Name is required");
}

// ---------------------------------------------------------------------------
// Test: exam with negative marks is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn exam_with_negative_marks_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/exam/new-exam",
        json!({
            "course_name": "Textiles",
            "course_code": "TX-101",
            "marks": -5
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: registration with a weak password is rejected and no account exists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn weak_password_registration_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/auth/register",
        json!({
            "name": "Admin",
            "email": "admin@example.test",
            "password": "short"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The account never existed, so logging in with it fails.
    let response = post_json(
        app,
        "/api/auth/login",
        json!({
            "email": "admin@example.test",
            "password": "short"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: marksheet with obtained marks above the maximum is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn marksheet_with_obtained_above_max_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/student/new-student",
        json!({
            "certificate_no": "C-200",
            "enrollment_id": "EN-200",
            "name": "Meena",
            "father_name": "Kumar",
            "course": "Fashion Design",
            "duration": "2 years",
            "date": "2026-05-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let student_id = body_json(response).await["student"]["id"].as_i64().unwrap();

    let response = post_json(
        app,
        "/api/marksheet/new-marksheet",
        json!({
            "student_id": student_id,
            "subjects": [
                {"course_name": "Draping", "course_code": "DR-1", "max_marks": 100, "obtained_marks": 120}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["result"], 0);
    assert_eq!(json["message"], "Subject 1: obtained marks must be between 0 and 100");
}
