use anyhow::Context;
use axum::Router;
use storage::Database;
use storage::repository::admin::AdminRepository;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cache;
mod config;
mod error;
mod features;
mod middleware;
mod state;

use cache::ViewCache;
use config::Config;
use middleware::auth::{SessionKeys, require_admin};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::registrations::handlers::register,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::delete_registration,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::session,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::registration::RegisterRequest,
            storage::dto::registration::TeamEntry,
            storage::dto::registration::RegistrationDetailResponse,
            storage::dto::registration::EventInfo,
            storage::dto::registration::ParticipantInfo,
            storage::dto::registration::TeamMemberInfo,
            storage::dto::auth::LoginRequest,
            storage::dto::common::ActionResponse,
            storage::models::Event,
            storage::models::EventType,
            storage::models::RegistrationStatus,
            storage::services::event_status::EventStatus,
        )
    ),
    tags(
        (name = "events", description = "Public event catalog and admin event management"),
        (name = "registrations", description = "Registration submission and admin review"),
        (name = "auth", description = "Admin session endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_session",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(
                            middleware::auth::SESSION_COOKIE,
                        ),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting club registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        let hash = features::auth::services::hash_password(password)
            .context("Failed to hash admin password")?;
        AdminRepository::new(db.pool())
            .ensure(email, &hash)
            .await
            .context("Failed to seed admin account")?;
        tracing::info!("Admin account ensured for {}", email);
    }

    let sessions = SessionKeys::from_secret(&config.session_secret);
    let state = AppState {
        db,
        cache: ViewCache::default(),
        sessions: sessions.clone(),
    };

    let admin_routes = Router::new()
        .merge(features::events::routes::admin_routes())
        .merge(features::registrations::routes::admin_routes())
        .route_layer(axum::middleware::from_fn_with_state(sessions, require_admin));

    let app = Router::new()
        .nest("/api/events", features::events::routes::routes())
        .nest("/api/registrations", features::registrations::routes::routes())
        .nest("/api/auth", features::auth::routes::routes())
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
