//! Integration tests for the plain CRUD resources: students, exams,
//! marksheets (with server-side grading), galleries, courses and auth.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with_storage, delete, get, get_with_auth, post_json,
    post_multipart, put_json, put_json_with_auth, MultipartForm,
};
use serde_json::json;
use sqlx::PgPool;

use atelier_storage::MemoryStorage;

fn student_payload(enrollment_id: &str, name: &str) -> serde_json::Value {
    json!({
        "certificate_no": format!("C-{enrollment_id}"),
        "enrollment_id": enrollment_id,
        "name": name,
        "father_name": "Suresh",
        "course": "Interior Design",
        "duration": "1 year",
        "date": "2026-06-01"
    })
}

// ---------------------------------------------------------------------------
// Test: duplicate student enrollment id returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn duplicate_enrollment_id_conflicts(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/student/new-student",
        student_payload("EN-1", "Meena"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app,
        "/api/student/new-student",
        student_payload("EN-1", "Meena Again"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["result"], 0);
    assert_eq!(
        json["message"],
        "Student with this enrollment ID already exists!"
    );
}

// ---------------------------------------------------------------------------
// Test: student search matches, misses and handles an empty keyword
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn student_search_behaviour(pool: PgPool) {
    let app = build_test_app(pool);

    for (enrollment, name) in [("EN-10", "Meena Kumari"), ("EN-11", "Arjun Rao")] {
        let response = post_json(
            app.clone(),
            "/api/student/new-student",
            student_payload(enrollment, name),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Case-insensitive match on name.
    let response = get(app.clone(), "/api/student/search?keyword=meena").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["students"][0]["name"], "Meena Kumari");

    // Match on father name.
    let response = get(app.clone(), "/api/student/search?keyword=suresh").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["count"], 2);

    // No match is a 404.
    let response = get(app.clone(), "/api/student/search?keyword=zzz").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // An empty keyword short-circuits to an empty list.
    let response = get(app, "/api/student/search?keyword=").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert!(json["students"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: duplicate exam course code returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn duplicate_exam_course_code_conflicts(pool: PgPool) {
    let app = build_test_app(pool);

    let payload = json!({
        "course_name": "Textiles",
        "course_code": "TX-101",
        "marks": 100
    });
    let response = post_json(app.clone(), "/api/exam/new-exam", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/api/exam/new-exam", payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Exam course code already exists!");
}

// ---------------------------------------------------------------------------
// Test: marksheet grades are computed server-side and recomputed on update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn marksheet_grading_is_server_side(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/student/new-student",
        student_payload("EN-20", "Meena"),
    )
    .await;
    let student_id = body_json(response).await["student"]["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        "/api/marksheet/new-marksheet",
        json!({
            "student_id": student_id,
            "subjects": [
                {"course_name": "Draping", "course_code": "DR-1", "max_marks": 100, "obtained_marks": 95},
                {"course_name": "Pattern Making", "course_code": "PM-1", "max_marks": 100, "obtained_marks": 45}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let marksheet = &json["marksheet"];
    let id = marksheet["id"].as_i64().unwrap();
    assert_eq!(marksheet["subjects"][0]["grade"], "A+");
    assert_eq!(marksheet["subjects"][1]["grade"], "D");
    assert_eq!(marksheet["total_max_marks"], 200);
    assert_eq!(marksheet["total_obtained_marks"], 140);
    // 140/200 is 70%.
    assert_eq!(marksheet["overall_grade"], "B+");

    // Replacing the subjects recomputes every derived value.
    let response = put_json(
        app.clone(),
        &format!("/api/marksheet/{id}"),
        json!({
            "subjects": [
                {"course_name": "Draping", "course_code": "DR-1", "max_marks": 50, "obtained_marks": 45}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let marksheet = &json["marksheet"];
    assert_eq!(marksheet["subjects"][0]["grade"], "A+");
    assert_eq!(marksheet["total_max_marks"], 50);
    assert_eq!(marksheet["total_obtained_marks"], 45);
    assert_eq!(marksheet["overall_grade"], "A+");

    // Reads join the student record.
    let response = get(app, &format!("/api/marksheet/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["marksheet"]["student"]["enrollment_id"], "EN-20");
}

// ---------------------------------------------------------------------------
// Test: marksheet for a missing student returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn marksheet_for_missing_student_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/marksheet/new-marksheet",
        json!({
            "student_id": 424242,
            "subjects": [
                {"course_name": "Draping", "course_code": "DR-1", "max_marks": 100, "obtained_marks": 50}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Student not found");
}

// ---------------------------------------------------------------------------
// Test: a student with several marksheets keeps all of them in the listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn listing_keeps_every_marksheet_of_a_student(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/student/new-student",
        student_payload("EN-21", "Arjun"),
    )
    .await;
    let student_id = body_json(response).await["student"]["id"].as_i64().unwrap();

    for code in ["DR-1", "PM-1"] {
        let response = post_json(
            app.clone(),
            "/api/marksheet/new-marksheet",
            json!({
                "student_id": student_id,
                "subjects": [
                    {"course_name": "Draping", "course_code": code, "max_marks": 100, "obtained_marks": 60}
                ]
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/marksheet/all-marksheets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let marksheets = json["marksheets"].as_array().unwrap();
    assert_eq!(marksheets.len(), 2);
    for marksheet in marksheets {
        assert_eq!(marksheet["student"]["enrollment_id"], "EN-21");
    }
}

// ---------------------------------------------------------------------------
// Test: gallery list flattens entries and single images can be removed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn gallery_flattens_and_deletes_single_images(pool: PgPool) {
    let storage = Arc::new(MemoryStorage::new());
    let app = build_test_app_with_storage(pool, storage.clone());

    // Host two images through the upload endpoint first.
    let mut urls = Vec::new();
    for name in ["a.png", "b.png"] {
        let form = MultipartForm::new().file("image", name, "image/png", b"png-bytes");
        let response = post_multipart(app.clone(), "/api/upload/", form).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        urls.push(body_json(response).await["url"].as_str().unwrap().to_string());
    }

    let response = post_json(
        app.clone(),
        "/api/gallery/new-gallery",
        json!({ "images": [{"img": urls[0]}, {"img": urls[1]}] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let gallery_id = body_json(response).await["gallery"]["id"].as_i64().unwrap();

    let response = get(app.clone(), "/api/gallery/all-gallery").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let image_id = json["images"][0]["image_id"].as_str().unwrap().to_string();

    // Removing one entry destroys the hosted object and shrinks the list.
    let response = delete(app.clone(), &format!("/api/gallery/{gallery_id}/{image_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(storage.object_count(), 1);

    let response = get(app, "/api/gallery/all-gallery").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
}

// ---------------------------------------------------------------------------
// Test: course list blocks arrive as JSON-stringified arrays
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn course_blocks_parse_stringified_arrays(pool: PgPool) {
    let app = build_test_app(pool);

    let form = MultipartForm::new()
        .text("banner_title", "Fashion Design")
        .text("course_type", "Degree")
        .text("course_title", "B.Des Fashion")
        .text("course_description", "Three year program.")
        .text("course_list_title", "What you learn")
        .text("course_list_desc", "Core modules")
        .text("course_of_courses_lists", r#"["Draping", "Pattern Making"]"#)
        .text("topic_lists", r#"["Color theory"]"#)
        .text("career_lists", r#"["Stylist"]"#)
        .text("course_lists", r#"["Semester 1"]"#)
        .file("bannerImage", "banner.png", "image/png", b"banner-bytes");

    let response = post_multipart(app.clone(), "/api/course/new-course", form).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let course = &json["course"];
    assert_eq!(course["course_of_courses_lists"][1], "Pattern Making");
    assert_eq!(course["topic_lists"][0], "Color theory");

    // A block that is not valid JSON is a 400.
    let form = MultipartForm::new()
        .text("banner_title", "Interior Design")
        .text("course_type", "Diploma")
        .text("course_title", "Dip. Interior")
        .text("course_description", "One year program.")
        .text("course_list_title", "Modules")
        .text("course_list_desc", "Core")
        .text("course_of_courses_lists", "[]")
        .text("topic_lists", "[]")
        .text("career_lists", "[]")
        .text("course_lists", "not-json")
        .file("bannerImage", "banner.png", "image/png", b"banner-bytes");

    let response = post_multipart(app, "/api/course/new-course", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "course_lists must be a JSON array"
    );
}

// ---------------------------------------------------------------------------
// Test: register, login, profile and change-password round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../atelier-db/migrations")]
async fn auth_round_trip(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/auth/register",
        json!({
            "name": "Admin",
            "email": "admin@example.test",
            "password": "Sup3r$ecret"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    // Password material never leaves the server.
    assert!(json["user"].get("password_hash").is_none());

    // Duplicate registration conflicts.
    let response = post_json(
        app.clone(),
        "/api/auth/register",
        json!({
            "name": "Admin",
            "email": "admin@example.test",
            "password": "Sup3r$ecret"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        app.clone(),
        "/api/auth/login",
        json!({"email": "admin@example.test", "password": "Sup3r$ecret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json["token"].as_str().unwrap().to_string();

    // Profile requires the Bearer token.
    let response = get(app.clone(), "/api/auth/profile").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_with_auth(app.clone(), "/api/auth/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["email"], "admin@example.test");

    // Wrong password is a 401 with a non-enumerating message.
    let response = post_json(
        app.clone(),
        "/api/auth/login",
        json!({"email": "admin@example.test", "password": "WrongPass1!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Invalid email or password");

    // Changing the password requires the current one.
    let response = put_json_with_auth(
        app.clone(),
        "/api/auth/change-password",
        &token,
        json!({"current_password": "WrongPass1!", "new_password": "N3w$ecret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_with_auth(
        app.clone(),
        "/api/auth/change-password",
        &token,
        json!({"current_password": "Sup3r$ecret", "new_password": "N3w$ecret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The new password logs in, the old one no longer does.
    let response = post_json(
        app.clone(),
        "/api/auth/login",
        json!({"email": "admin@example.test", "password": "N3w$ecret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({"email": "admin@example.test", "password": "Sup3r$ecret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
