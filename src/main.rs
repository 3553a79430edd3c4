//! ClinicHub Server — clinic and patient management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use clinichub_core::config::AppConfig;
use clinichub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CLINICHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClinicHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = clinichub_database::connection::create_pool(&config.database).await?;
    clinichub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(clinichub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let patient_repo = Arc::new(
        clinichub_database::repositories::patient::PatientRepository::new(db_pool.clone()),
    );
    let professional_repo = Arc::new(
        clinichub_database::repositories::professional::ProfessionalRepository::new(
            db_pool.clone(),
        ),
    );
    let receptionist_repo = Arc::new(
        clinichub_database::repositories::receptionist::ReceptionistRepository::new(
            db_pool.clone(),
        ),
    );
    let school_repo = Arc::new(
        clinichub_database::repositories::school::SchoolRepository::new(db_pool.clone()),
    );
    let record_repo = Arc::new(
        clinichub_database::repositories::record::RecordRepository::new(db_pool.clone()),
    );
    let report_repo = Arc::new(
        clinichub_database::repositories::report::ReportRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth system ──────────────────────────────────────
    let password_hasher = Arc::new(clinichub_auth::password::hasher::PasswordHasher::new());
    let password_validator = Arc::new(clinichub_auth::password::validator::PasswordValidator::new(
        &config.auth,
    ));
    let token_issuer = Arc::new(clinichub_auth::jwt::encoder::TokenIssuer::new(&config.auth));
    let token_validator = Arc::new(clinichub_auth::jwt::decoder::TokenValidator::new(
        &config.auth,
    ));
    let login_service = Arc::new(clinichub_auth::login::LoginService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_issuer),
    ));
    let suspension_manager = Arc::new(clinichub_auth::suspension::SuspensionManager::new(
        Arc::clone(&user_repo),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let identity_service = Arc::new(clinichub_service::identity::IdentityService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let patient_service = Arc::new(clinichub_service::patient::PatientService::new(
        Arc::clone(&patient_repo),
        Arc::clone(&school_repo),
        Arc::clone(&identity_service),
    ));
    let professional_service = Arc::new(clinichub_service::professional::ProfessionalService::new(
        Arc::clone(&professional_repo),
        Arc::clone(&identity_service),
    ));
    let receptionist_service = Arc::new(clinichub_service::receptionist::ReceptionistService::new(
        Arc::clone(&receptionist_repo),
        Arc::clone(&identity_service),
    ));
    let school_service = Arc::new(clinichub_service::school::SchoolService::new(Arc::clone(
        &school_repo,
    )));
    let record_service = Arc::new(clinichub_service::record::RecordService::new(
        Arc::clone(&record_repo),
        Arc::clone(&patient_repo),
        Arc::clone(&professional_repo),
    ));
    let report_service = Arc::new(clinichub_service::report::ReportService::new(
        Arc::clone(&report_repo),
        Arc::clone(&record_repo),
    ));
    let admin_user_service = Arc::new(clinichub_service::user::AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&suspension_manager),
    ));

    // ── Step 5: Bootstrap admin ──────────────────────────────────
    bootstrap_admin(&config, &user_repo, &password_hasher).await?;

    // ── Step 6: Shutdown channel & scheduled tasks ───────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let sweeper = Arc::new(clinichub_worker::jobs::suspension::SuspensionSweeper::new(
            Arc::clone(&user_repo),
        ));
        let scheduler =
            clinichub_worker::scheduler::SweepScheduler::new(sweeper, config.worker.clone())
                .await?;
        scheduler.register_tasks().await?;
        scheduler.start().await?;

        let worker_cancel = shutdown_rx.clone();
        Some(tokio::spawn(scheduler.run(worker_cancel)))
    } else {
        tracing::info!("Scheduled tasks disabled");
        None
    };

    // ── Step 7: Build and start HTTP server ──────────────────────
    let app_state = clinichub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        token_validator,
        login_service,
        user_repo,
        patient_service,
        professional_service,
        receptionist_service,
        school_service,
        record_service,
        report_service,
        admin_user_service,
    };

    let app = clinichub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ClinicHub server listening on {addr}");

    // ── Step 8: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = worker_handle {
        let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("ClinicHub server shut down gracefully");
    Ok(())
}

/// Ensures the bootstrap admin account exists.
///
/// Argon2 hashes cannot be seeded from SQL migrations, so the first
/// startup creates the account from configuration.
async fn bootstrap_admin(
    config: &AppConfig,
    user_repo: &Arc<clinichub_database::repositories::user::UserRepository>,
    hasher: &Arc<clinichub_auth::password::hasher::PasswordHasher>,
) -> Result<(), AppError> {
    let email = &config.auth.bootstrap_admin_email;

    if user_repo.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    let password_hash = hasher.hash_password(&config.auth.bootstrap_admin_password)?;
    let user = user_repo
        .create(&clinichub_entity::user::model::CreateUser {
            email: email.clone(),
            password_hash,
        })
        .await?;
    user_repo
        .assign_role(user.id, clinichub_entity::user::role::ROLE_ADMIN)
        .await?;

    tracing::info!(email = %email, "Bootstrap admin account created");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
