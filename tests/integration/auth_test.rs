//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_login_sets_cookie_and_returns_token() {
    let app = TestApp::new().await;
    app.create_admin().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "admin123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["email"], "admin@example.com");
    assert!(!response.body["token"].as_str().unwrap().is_empty());

    let cookie = response.set_cookie.expect("No Set-Cookie header");
    assert!(cookie.starts_with("jwt_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.create_admin().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["errorCode"], "AUTHENTICATION");
    // Generic message: never reveals which of email/password was wrong.
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email_is_indistinguishable() {
    let app = TestApp::new().await;
    app.create_admin().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "admin123",
            })),
            None,
        )
        .await;

    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.body["message"], wrong_password.body["message"]);
    assert_eq!(
        unknown_email.body["errorCode"],
        wrong_password.body["errorCode"]
    );
}

#[tokio::test]
async fn test_email_is_matched_case_sensitively() {
    let app = TestApp::new().await;
    app.create_admin().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ADMIN@example.com",
                "password": "admin123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let token = app.login("admin@example.com", "admin123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "admin@example.com");

    let authorities: Vec<String> = response.body["data"]["authorities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(authorities.contains(&"ROLE_ADMIN".to_string()));
    assert!(authorities.contains(&"user:manage".to_string()));
}

#[tokio::test]
async fn test_me_without_cookie() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["errorCode"], "AUTHENTICATION");
    assert_eq!(response.body["path"], "/api/auth/me");
}

#[tokio::test]
async fn test_tampered_token_never_reaches_handler() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let token = app.login("admin@example.com", "admin123").await;

    // Flip one character in the signature segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let sig = &mut parts[2];
    let flipped = if sig.ends_with('A') { "B" } else { "A" };
    sig.replace_range(sig.len() - 1.., flipped);
    let tampered = parts.join(".");

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["errorCode"], "AUTHENTICATION");
    // The probe endpoint's success shape never appears.
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_expired_token_rejected_at_filter() {
    let app = TestApp::new().await;
    app.create_admin().await;

    // Hand-build an already-expired token signed with the test secret.
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": "admin@example.com",
        "authorities": "ROLE_ADMIN,user:manage",
        "iat": now - 7200,
        "exp": now - 3600,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(app.config.auth.jwt_secret.as_bytes()),
    )
    .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["errorCode"], "AUTHENTICATION");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("expired")
    );
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    app.create_admin().await;
    let token = app.login("admin@example.com", "admin123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie.expect("No Set-Cookie header");
    // Removal cookie: empty value.
    assert!(cookie.starts_with("jwt_token="));
    assert!(cookie.contains("jwt_token=;") || cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_admin_route_forbidden_for_non_admin() {
    let app = TestApp::new().await;
    app.create_admin().await;
    app.create_user_with_role("patient@example.com", "grove-Lantern41", "PATIENT")
        .await;
    let token = app.login("patient@example.com", "grove-Lantern41").await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["errorCode"], "FORBIDDEN");
    // Generic message, no authority topology leaked.
    assert_eq!(response.body["message"], "Insufficient privileges");
}

#[tokio::test]
async fn test_admin_route_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/admin/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["path"], "/api/admin/users");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
