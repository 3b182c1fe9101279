mod common;

use axum::http::StatusCode;
use campus_auth::modules::auth::registration::Role;
use common::{
    body_json, create_test_admin, create_test_user, post_json, post_json_auth, setup_test_app,
    test_jwt_config, unique_identifier, unique_username, user_count,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = unique_username("student");

    let request = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": username,
            "password": "testpass123",
            "full_name": "Student One",
            "identifier": "12345678"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "accept");
    assert_eq!(body["message"], "Success register");
    assert_eq!(body["username"], username);
    assert_eq!(body["role"], "STUDENT");

    assert_eq!(user_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_missing_or_empty_field(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let payloads = vec![
        json!({"password": "pw", "full_name": "Student One", "identifier": "12345678"}),
        json!({"username": "student1", "full_name": "Student One", "identifier": "12345678"}),
        json!({"username": "student1", "password": "pw", "identifier": "12345678"}),
        json!({"username": "student1", "password": "pw", "full_name": "Student One"}),
        json!({"username": "", "password": "pw", "full_name": "Student One", "identifier": "12345678"}),
        json!({"username": "student1", "password": "", "full_name": "Student One", "identifier": "12345678"}),
        json!({"username": "student1", "password": "pw", "full_name": "", "identifier": "12345678"}),
        json!({"username": "student1", "password": "pw", "full_name": "Student One", "identifier": ""}),
    ];

    for payload in payloads {
        let request = post_json("/api/auth/public/signup/student", &payload);
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid payload");
    }

    // No store mutation happened for any of the rejected payloads.
    assert_eq!(user_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_non_numeric_nim(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": unique_username("student"),
            "password": "testpass123",
            "full_name": "Student One",
            "identifier": "12a45678"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "NIM must be a numeric string");

    assert_eq!(user_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = unique_username("student");

    let first = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": username,
            "password": "testpass123",
            "full_name": "Student One",
            "identifier": unique_identifier()
        }),
    );
    let response = app.clone().oneshot(first).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Same username, different NIM: rejected before any mutation.
    let second = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": username,
            "password": "otherpass",
            "full_name": "Student Two",
            "identifier": unique_identifier()
        }),
    );
    let response = app.oneshot(second).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Username already exists");

    assert_eq!(user_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_username_across_roles(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (_admin, token) = create_test_admin(&pool).await;
    let username = unique_username("taken");

    let student = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": username,
            "password": "testpass123",
            "full_name": "Student One",
            "identifier": unique_identifier()
        }),
    );
    let response = app.clone().oneshot(student).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let lecturer = post_json_auth(
        "/api/auth/admin/signup/lecturer",
        &token,
        &json!({
            "username": username,
            "password": "lectpass",
            "full_name": "Lecturer One",
            "identifier": unique_identifier()
        }),
    );
    let response = app.oneshot(lecturer).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Username already exists");

    // Only the admin fixture and the first registration persisted.
    assert_eq!(user_count(&pool).await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_nim(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let nim = unique_identifier();

    let first = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": unique_username("student"),
            "password": "testpass123",
            "full_name": "Student One",
            "identifier": nim
        }),
    );
    let response = app.clone().oneshot(first).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let second = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": unique_username("student"),
            "password": "otherpass",
            "full_name": "Student Two",
            "identifier": nim
        }),
    );
    let response = app.oneshot(second).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "NIM already exists");

    assert_eq!(user_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_admin_requires_token(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = post_json(
        "/api/auth/admin/signup",
        &json!({
            "username": unique_username("admin"),
            "password": "adminpass",
            "full_name": "Admin One",
            "identifier": unique_identifier()
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(user_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_admin_forbidden_for_student_token(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let student =
        create_test_user(&pool, &unique_username("student"), "studentpass", Role::Student).await;
    let token = campus_auth::utils::jwt::create_access_token(
        student.id,
        &student.username,
        student.role,
        &test_jwt_config(),
    )
    .unwrap();

    let request = post_json_auth(
        "/api/auth/admin/signup",
        &token,
        &json!({
            "username": unique_username("admin"),
            "password": "adminpass",
            "full_name": "Admin One",
            "identifier": unique_identifier()
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(user_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_admin_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (_admin, token) = create_test_admin(&pool).await;
    let username = unique_username("admin");

    let request = post_json_auth(
        "/api/auth/admin/signup",
        &token,
        &json!({
            "username": username,
            "password": "adminpass",
            "full_name": "Admin Two",
            "identifier": unique_identifier()
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "accept");
    assert_eq!(body["username"], username);
    assert_eq!(body["role"], "ADMIN");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_lecturer_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (_admin, token) = create_test_admin(&pool).await;
    let username = unique_username("lecturer");

    let request = post_json_auth(
        "/api/auth/admin/signup/lecturer",
        &token,
        &json!({
            "username": username,
            "password": "lectpass",
            "full_name": "Lecturer One",
            "identifier": unique_identifier()
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "accept");
    assert_eq!(body["role"], "LECTURER");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_accepts_legacy_field_names(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = unique_username("student");

    // fullName and nim are the field names legacy clients send.
    let request = post_json(
        "/api/auth/public/signup/student",
        &json!({
            "username": username,
            "password": "testpass123",
            "fullName": "Student One",
            "nim": "87654321"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "accept");
    assert_eq!(body["role"], "STUDENT");
}
