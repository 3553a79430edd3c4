//! Auth handlers — login, logout, me, and patient self-registration.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use clinichub_service::patient::RegisterPatient;

use crate::dto::request::{LoginRequest, RegisterPatientRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Verifies credentials, issues a token, and sets the token cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    req.validate()?;

    let outcome = state.login_service.login(&req.email, &req.password).await?;

    let jar = jar.add(token_cookie(
        &state,
        outcome.issued.token.clone(),
        state.config.auth.token_ttl_seconds as i64,
    ));

    Ok((
        jar,
        Json(LoginResponse {
            id: outcome.user.id,
            email: outcome.user.email,
            message: "Login successful".to_string(),
            token: outcome.issued.token,
            success: true,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clears the token cookie. The token itself stays valid until expiry
/// (stateless tokens); clearing the cookie logs the browser out.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let mut removal = Cookie::from(state.config.auth.cookie_name.clone());
    removal.set_path("/");
    let jar = jar.remove(removal);

    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    )
}

/// GET /api/auth/me
///
/// Returns the current principal. Also serves as the probe endpoint for
/// verifying that invalid tokens never reach handler logic.
pub async fn me(user: CurrentUser) -> Json<ApiResponse<MeResponse>> {
    let mut authorities: Vec<String> = user.authorities.iter().cloned().collect();
    authorities.sort_unstable();

    Json(ApiResponse::ok(MeResponse {
        email: user.email.clone(),
        authorities,
    }))
}

/// POST /api/auth/register
///
/// Public patient self-registration: creates the identity record and the
/// patient row together.
pub async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientRequest>,
) -> Result<Json<ApiResponse<clinichub_entity::patient::Patient>>, ApiError> {
    req.validate()?;

    let patient = state
        .patient_service
        .register(RegisterPatient {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            document_number: req.document_number,
            birth_date: req.birth_date,
            phone: req.phone,
            address: req.address,
            school_id: req.school_id,
        })
        .await?;

    Ok(Json(ApiResponse::ok(patient)))
}

/// Builds the token cookie per the cookie contract: HTTP-only, path `/`,
/// max-age equal to the token TTL; `Secure` and SameSite from config.
fn token_cookie(state: &AppState, token: String, max_age_seconds: i64) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.auth.cookie_name.clone(), token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(state.config.auth.cookie_secure);
    cookie.set_same_site(same_site(&state.config.auth.cookie_same_site));
    cookie.set_max_age(time::Duration::seconds(max_age_seconds));
    cookie
}

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
