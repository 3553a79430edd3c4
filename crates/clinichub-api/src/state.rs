//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use clinichub_auth::jwt::decoder::TokenValidator;
use clinichub_auth::login::LoginService;
use clinichub_core::config::AppConfig;
use clinichub_database::repositories::user::UserRepository;
use clinichub_service::patient::PatientService;
use clinichub_service::professional::ProfessionalService;
use clinichub_service::receptionist::ReceptionistService;
use clinichub_service::record::RecordService;
use clinichub_service::report::ReportService;
use clinichub_service::school::SchoolService;
use clinichub_service::user::AdminUserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Token validator for the request filter
    pub token_validator: Arc<TokenValidator>,
    /// Credential verification + token issuance
    pub login_service: Arc<LoginService>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Patient service
    pub patient_service: Arc<PatientService>,
    /// Professional service
    pub professional_service: Arc<ProfessionalService>,
    /// Receptionist service
    pub receptionist_service: Arc<ReceptionistService>,
    /// School service
    pub school_service: Arc<SchoolService>,
    /// Medical record service
    pub record_service: Arc<RecordService>,
    /// Clinical report service
    pub report_service: Arc<ReportService>,
    /// Admin user management service
    pub admin_user_service: Arc<AdminUserService>,
}
