//! Integration tests for the one-way approval workflow on admissions,
//! enquiries and contacts, including the enquiry-to-admission promotion.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, put};
use serde_json::json;
use sqlx::PgPool;

async fn create_contact(app: axum::Router) -> i64 {
    let response = post_json(
        app,
        "/api/contact/new-contact",
        json!({
            "name": "Ravi Shah",
            "email": "ravi@example.test",
            "phone_number": "9876543210",
            "message": "Do you offer weekend batches?"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["contact"]["id"].as_i64().unwrap()
}

async fn create_enquiry(app: axum::Router) -> i64 {
    let response = post_json(
        app,
        "/api/enquiry/new-enquiry",
        json!({
            "name": "Asha Verma",
            "email": "asha@example.test",
            "phone_number": "9876543210",
            "profile": "Student",
            "select_course": "Fashion Design",
            "select_state": "Karnataka",
            "district": "Bengaluru Urban",
            "city": "Bengaluru",
            "message": "Interested in the next batch."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["enquiry"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: contact approval flips the flag once and stays put afterwards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn contact_approval_is_one_way_and_idempotent(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_contact(app.clone()).await;

    let response = put(app.clone(), &format!("/api/contact/approve/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["contact"]["approved"], true);
    let updated_at = first["contact"]["updated_at"].clone();

    // A second approval is non-mutating and reports it.
    let response = put(app.clone(), &format!("/api/contact/approve/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["message"], "Contact already approved");
    assert_eq!(second["contact"]["approved"], true);
    assert_eq!(second["contact"]["updated_at"], updated_at);
}

// ---------------------------------------------------------------------------
// Test: approving a missing admission returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn approving_missing_admission_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put(app, "/api/admission/admission-approve/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["result"], 0);
    assert_eq!(json["message"], "Admission form not found");
}

// ---------------------------------------------------------------------------
// Test: enquiry approval promotes it into exactly one pending admission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn enquiry_approval_promotes_to_pending_admission(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_enquiry(app.clone()).await;

    let response = put(app.clone(), &format!("/api/enquiry/approve/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Enquiry approved and admission created");
    assert_eq!(json["enquiry"]["approved"], true);

    // The promoted admission copies the enquiry fields verbatim and starts
    // in the pending state.
    let admission = &json["admission"];
    assert_eq!(admission["approved"], false);
    assert_eq!(admission["name"], "Asha Verma");
    assert_eq!(admission["email"], "asha@example.test");
    assert_eq!(admission["phone_number"], "9876543210");
    assert_eq!(admission["select_course"], "Fashion Design");
    assert_eq!(admission["select_state"], "Karnataka");
    assert_eq!(admission["district"], "Bengaluru Urban");
    assert_eq!(admission["city"], "Bengaluru");

    // Re-approving does not mint a second admission.
    let response = put(app.clone(), &format!("/api/enquiry/approve/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Enquiry already approved");
    assert!(json.get("admission").is_none());

    let response = get(app, "/api/admission/all-admission").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
}

// ---------------------------------------------------------------------------
// Test: approval succeeds while email notifications are unconfigured
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn contact_approval_succeeds_without_mailer(pool: PgPool) {
    // Test apps run with the mailer in disabled mode; approval must still
    // transition and say so.
    let app = build_test_app(pool);
    let id = create_contact(app.clone()).await;

    let response = put(app, &format!("/api/contact/approve/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["contact"]["approved"], true);
    assert_eq!(
        json["message"],
        "Contact approved; email notifications are not configured"
    );
}
