use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{PgStudentRepository, PgTeacherRepository};
use application::{NotificationService, RegistrationService, RosterService, SuspensionService};
use config::ServerConfig;
use roster::{StudentRepository, TeacherRepository};

/// Type aliases for application services over the repository ports
pub type AppRosterService = RosterService<dyn StudentRepository>;
pub type AppRegistrationService = RegistrationService<dyn TeacherRepository, dyn StudentRepository>;
pub type AppSuspensionService = SuspensionService<dyn StudentRepository>;
pub type AppNotificationService = NotificationService<dyn StudentRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<AppRosterService>,
    pub registration_service: Arc<AppRegistrationService>,
    pub suspension_service: Arc<AppSuspensionService>,
    pub notification_service: Arc<AppNotificationService>,
}

impl AppState {
    pub fn new(teachers: Arc<dyn TeacherRepository>, students: Arc<dyn StudentRepository>) -> Self {
        Self {
            roster_service: Arc::new(RosterService::new(students.clone())),
            registration_service: Arc::new(RegistrationService::new(teachers, students.clone())),
            suspension_service: Arc::new(SuspensionService::new(students.clone())),
            notification_service: Arc::new(NotificationService::new(students)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Roster API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the full HTTP router
fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .merge(routes::students::router())
        .merge(routes::notifications::router());

    // axum cannot nest at the root
    let router = if config.api_prefix == "/" {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(&config.api_prefix, api_routes)
    };

    let openapi = routes::swagger::api_doc(&config.api_prefix);

    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state);

    if config.request_log {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

#[cfg(test)]
pub(crate) fn test_router(store: Arc<adapters::memory::InMemoryRoster>) -> Router {
    application::init_test_tracing();
    let state = AppState::new(store.clone(), store);
    build_router(state, &ServerConfig::default())
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    dotenvy::dotenv().ok();
    tracing::info!("Roster API initializing...");

    let config = ServerConfig::from_secrets(&secrets).context("Invalid server configuration")?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize application services
    let teacher_repo: Arc<dyn TeacherRepository> = Arc::new(PgTeacherRepository::new(pool.clone()));
    let student_repo: Arc<dyn StudentRepository> = Arc::new(PgStudentRepository::new(pool));
    let state = AppState::new(teacher_repo, student_repo);

    let router = build_router(state, &config);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Roster API ready under {}", config.api_prefix);

    Ok(router.into())
}
