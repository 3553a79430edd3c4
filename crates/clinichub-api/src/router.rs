//! Route definitions for the ClinicHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Requests
//! pass the token-validation filter, then the declarative route guard,
//! before any handler runs; errors surface through the envelope layer.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(patient_routes())
        .merge(professional_routes())
        .merge(receptionist_routes())
        .merge(school_routes())
        .merge(record_routes())
        .merge(report_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::guard::authorize))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
        .layer(axum_middleware::from_fn(
            middleware::envelope::error_envelope,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, logout, me, patient self-registration.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/register", post(handlers::auth::register_patient))
}

/// Patient CRUD, search, and medical background.
fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patients", get(handlers::patient::list_patients))
        .route("/patients", post(handlers::patient::create_patient))
        .route("/patients/search", get(handlers::patient::search_patients))
        .route("/patients/{id}", get(handlers::patient::get_patient))
        .route("/patients/{id}", put(handlers::patient::update_patient))
        .route("/patients/{id}", delete(handlers::patient::delete_patient))
        .route(
            "/patients/{id}/background",
            get(handlers::patient::get_background),
        )
        .route(
            "/patients/{id}/background",
            put(handlers::patient::upsert_background),
        )
}

/// Professional CRUD.
fn professional_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/professionals",
            get(handlers::professional::list_professionals),
        )
        .route(
            "/professionals",
            post(handlers::professional::create_professional),
        )
        .route(
            "/professionals/{id}",
            get(handlers::professional::get_professional),
        )
        .route(
            "/professionals/{id}",
            put(handlers::professional::update_professional),
        )
        .route(
            "/professionals/{id}",
            delete(handlers::professional::delete_professional),
        )
}

/// Receptionist CRUD.
fn receptionist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/receptionists",
            get(handlers::receptionist::list_receptionists),
        )
        .route(
            "/receptionists",
            post(handlers::receptionist::create_receptionist),
        )
        .route(
            "/receptionists/{id}",
            get(handlers::receptionist::get_receptionist),
        )
        .route(
            "/receptionists/{id}",
            put(handlers::receptionist::update_receptionist),
        )
        .route(
            "/receptionists/{id}",
            delete(handlers::receptionist::delete_receptionist),
        )
}

/// School CRUD.
fn school_routes() -> Router<AppState> {
    Router::new()
        .route("/schools", get(handlers::school::list_schools))
        .route("/schools", post(handlers::school::create_school))
        .route("/schools/{id}", get(handlers::school::get_school))
        .route("/schools/{id}", put(handlers::school::update_school))
        .route("/schools/{id}", delete(handlers::school::delete_school))
}

/// Medical records, diagnoses, follow-ups, clinical history.
fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(handlers::record::list_records))
        .route("/records", post(handlers::record::open_record))
        .route("/records/{id}", get(handlers::record::get_record))
        .route("/records/{id}", delete(handlers::record::delete_record))
        .route("/records/{id}/notes", put(handlers::record::update_notes))
        .route(
            "/records/{id}/diagnoses",
            post(handlers::record::add_diagnosis),
        )
        .route(
            "/records/{id}/follow-ups",
            post(handlers::record::add_follow_up),
        )
}

/// Clinical reports.
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(handlers::report::create_report))
        .route("/reports/{id}", get(handlers::report::get_report))
        .route("/reports/{id}", delete(handlers::report::delete_report))
        .route(
            "/reports/record/{record_id}",
            get(handlers::report::list_reports_for_record),
        )
}

/// Admin-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users/{id}", get(handlers::admin::users::get_user))
        .route(
            "/admin/users/{id}/suspend",
            post(handlers::admin::users::suspend_user),
        )
        .route(
            "/admin/users/{id}/activate",
            post(handlers::admin::users::activate_user),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
