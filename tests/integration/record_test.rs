//! Integration tests for medical records and clinical history.

use http::StatusCode;

use crate::helpers::TestApp;

/// Registers a patient + professional and returns (patient_id, professional_id).
async fn seed_clinic(app: &TestApp, admin_token: &str, tag: &str) -> (i64, i64) {
    let patient = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": format!("patient-{tag}@example.com"),
                "password": "grove-Lantern41",
                "first_name": "Paula",
                "last_name": format!("Santos-{tag}"),
                "document_number": format!("DOC-{tag}"),
                "birth_date": "2012-07-04",
            })),
            None,
        )
        .await;
    assert_eq!(patient.status, StatusCode::OK, "{:?}", patient.body);
    let patient_id = patient.body["data"]["id"].as_i64().unwrap();

    let professional = app
        .request(
            "POST",
            "/api/professionals",
            Some(serde_json::json!({
                "email": format!("doctor-{tag}@example.com"),
                "password": "grove-Lantern41",
                "first_name": "Diego",
                "last_name": format!("Vargas-{tag}"),
                "license_number": format!("LIC-{tag}"),
                "specialty": "pediatrics",
            })),
            Some(admin_token),
        )
        .await;
    assert_eq!(professional.status, StatusCode::OK, "{:?}", professional.body);
    let professional_id = professional.body["data"]["id"].as_i64().unwrap();

    (patient_id, professional_id)
}

#[tokio::test]
async fn test_open_record_with_diagnosis_and_follow_up() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;
    let (patient_id, professional_id) = seed_clinic(&app, &admin_token, "r1").await;

    let opened = app
        .request(
            "POST",
            "/api/records",
            Some(serde_json::json!({
                "patient_id": patient_id,
                "professional_id": professional_id,
                "notes": "Initial consultation",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(opened.status, StatusCode::OK, "{:?}", opened.body);
    let record_id = opened.body["data"]["id"].as_i64().unwrap();

    let diagnosis = app
        .request(
            "POST",
            &format!("/api/records/{record_id}/diagnoses"),
            Some(serde_json::json!({
                "code": "F90.0",
                "description": "Attention-deficit disorder",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(diagnosis.status, StatusCode::OK);

    let follow_up = app
        .request(
            "POST",
            &format!("/api/records/{record_id}/follow-ups"),
            Some(serde_json::json!({
                "professional_id": professional_id,
                "note": "Responding well to sessions",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(follow_up.status, StatusCode::OK);

    let fetched = app
        .request(
            "GET",
            &format!("/api/records/{record_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["patient_id"], patient_id);
    assert_eq!(fetched.body["data"]["diagnoses"][0]["code"], "F90.0");
    assert_eq!(
        fetched.body["data"]["follow_ups"][0]["note"],
        "Responding well to sessions"
    );
}

#[tokio::test]
async fn test_open_record_for_unknown_patient_fails() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;
    let (_, professional_id) = seed_clinic(&app, &admin_token, "r2").await;

    let response = app
        .request(
            "POST",
            "/api/records",
            Some(serde_json::json!({
                "patient_id": 999999,
                "professional_id": professional_id,
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorCode"], "VALIDATION");
}

#[tokio::test]
async fn test_clinical_history_filter() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;
    let (patient_a, professional_a) = seed_clinic(&app, &admin_token, "h1").await;
    let (patient_b, professional_b) = seed_clinic(&app, &admin_token, "h2").await;

    for (patient_id, professional_id) in [
        (patient_a, professional_a),
        (patient_a, professional_b),
        (patient_b, professional_b),
    ] {
        let response = app
            .request(
                "POST",
                "/api/records",
                Some(serde_json::json!({
                    "patient_id": patient_id,
                    "professional_id": professional_id,
                })),
                Some(&admin_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    // No filter: everything.
    let all = app
        .request("GET", "/api/records", None, Some(&admin_token))
        .await;
    assert_eq!(all.body["data"]["total_items"], 3);

    // By patient.
    let by_patient = app
        .request(
            "GET",
            &format!("/api/records?patient_id={patient_a}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(by_patient.body["data"]["total_items"], 2);

    // By patient and professional.
    let narrowed = app
        .request(
            "GET",
            &format!("/api/records?patient_id={patient_a}&professional_id={professional_b}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(narrowed.body["data"]["total_items"], 1);

    // A window entirely in the past matches nothing.
    let stale_window = app
        .request(
            "GET",
            "/api/records?opened_to=2001-01-01T00:00:00Z",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(stale_window.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_clinical_report_lifecycle() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let admin_token = app.login("admin@example.com", "admin123").await;
    let (patient_id, professional_id) = seed_clinic(&app, &admin_token, "rep").await;

    let record = app
        .request(
            "POST",
            "/api/records",
            Some(serde_json::json!({
                "patient_id": patient_id,
                "professional_id": professional_id,
            })),
            Some(&admin_token),
        )
        .await;
    let record_id = record.body["data"]["id"].as_i64().unwrap();

    let report = app
        .request(
            "POST",
            "/api/reports",
            Some(serde_json::json!({
                "record_id": record_id,
                "professional_id": professional_id,
                "title": "Quarterly evaluation",
                "body": "Steady progress across all goals.",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(report.status, StatusCode::OK, "{:?}", report.body);

    let listed = app
        .request(
            "GET",
            &format!("/api/reports/record/{record_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"]["total_items"], 1);
    assert_eq!(
        listed.body["data"]["items"][0]["title"],
        "Quarterly evaluation"
    );
}
