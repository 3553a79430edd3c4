//! Integration tests for patient registration, search, and backgrounds.

use http::StatusCode;

use crate::helpers::TestApp;

fn registration_body(email: &str, document: &str, first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "grove-Lantern41",
        "first_name": first,
        "last_name": last,
        "document_number": document,
        "birth_date": "2014-03-19",
        "phone": "555-0101",
        "address": "12 Elm Street",
    })
}

#[tokio::test]
async fn test_public_patient_registration() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "ana@example.com",
                "DOC-1001",
                "Ana",
                "Moreno",
            )),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["first_name"], "Ana");
    assert_eq!(response.body["data"]["document_number"], "DOC-1001");

    // The linked identity can log in immediately.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ana@example.com",
                "password": "grove-Lantern41",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_document_number_conflicts() {
    let app = TestApp::new().await;

    let first = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "one@example.com",
                "DOC-2002",
                "Bruno",
                "Silva",
            )),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "two@example.com",
                "DOC-2002",
                "Clara",
                "Silva",
            )),
            None,
        )
        .await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["errorCode"], "CONFLICT");
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new().await;

    let first = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "dup@example.com",
                "DOC-3003",
                "Dora",
                "Nunes",
            )),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "dup@example.com",
                "DOC-3004",
                "Elsa",
                "Nunes",
            )),
            None,
        )
        .await;

    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_registration_validation_details() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "short",
                "first_name": "",
                "last_name": "X",
                "document_number": "DOC-4004",
                "birth_date": "2014-03-19",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorCode"], "VALIDATION");
    assert!(!response.body["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_patient_search_by_name_fragment() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    for (email, doc, first, last) in [
        ("p1@example.com", "DOC-5001", "Gabriela", "Ferreira"),
        ("p2@example.com", "DOC-5002", "Gabriel", "Costa"),
        ("p3@example.com", "DOC-5003", "Marta", "Lopes"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/auth/register",
                Some(registration_body(email, doc, first, last)),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request(
            "GET",
            "/api/patients/search?q=gabri",
            None,
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(response.body["data"]["total_items"], 2);

    // Document-number fragments match too.
    let by_doc = app
        .request(
            "GET",
            "/api/patients/search?q=DOC-5003",
            None,
            Some(&admin_token),
        )
        .await;
    let items = by_doc.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["first_name"], "Marta");
}

#[tokio::test]
async fn test_patient_routes_forbidden_for_patients() {
    let app = TestApp::new().await;
    app.request(
        "POST",
        "/api/auth/register",
        Some(registration_body(
            "self@example.com",
            "DOC-6001",
            "Rui",
            "Pinto",
        )),
        None,
    )
    .await;
    let token = app.login("self@example.com", "grove-Lantern41").await;

    let response = app.request("GET", "/api/patients", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_background_upsert_roundtrip() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;

    let registered = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration_body(
                "bg@example.com",
                "DOC-7001",
                "Ines",
                "Ramos",
            )),
            None,
        )
        .await;
    let patient_id = registered.body["data"]["id"].as_i64().unwrap();

    let missing = app
        .request(
            "GET",
            &format!("/api/patients/{patient_id}/background"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let upsert = app
        .request(
            "PUT",
            &format!("/api/patients/{patient_id}/background"),
            Some(serde_json::json!({
                "allergies": "penicillin",
                "medications": "none",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(upsert.status, StatusCode::OK);

    // Second upsert replaces the row, not duplicates it.
    let replaced = app
        .request(
            "PUT",
            &format!("/api/patients/{patient_id}/background"),
            Some(serde_json::json!({
                "allergies": "penicillin, latex",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK);

    let fetched = app
        .request(
            "GET",
            &format!("/api/patients/{patient_id}/background"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["allergies"], "penicillin, latex");
    assert!(fetched.body["data"]["medications"].is_null());
}
