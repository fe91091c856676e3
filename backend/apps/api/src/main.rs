//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use access::{AccessConfig, PgGrantRepository, access_router};
use auth::domain::repository::SessionRepository;
use auth::middleware::{AuthMiddlewareState, require_auth_session};
use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use platform::mailer::{ConsoleMailer, Mailer, SmtpConfig, SmtpMailer};
use portfolio::{PgItemRepository, portfolio_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,access=info,auth=info,portfolio=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired auth sessions
    // Errors here should not prevent server startup
    let auth_store_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_store_for_cleanup.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(
                sessions_deleted = sessions,
                "Auth session cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }

    // Access configuration
    let admin_email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());
    let public_base_url =
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let access_config = if cfg!(debug_assertions) {
        AccessConfig {
            admin_email,
            public_base_url,
            ..AccessConfig::development()
        }
    } else {
        AccessConfig {
            admin_email,
            public_base_url,
            grant_secret: load_secret("ACCESS_GRANT_SECRET")?,
            ..AccessConfig::default()
        }
    };

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let password_pepper = match env::var("PASSWORD_PEPPER") {
            Ok(b64) => Some(Engine::decode(&general_purpose::STANDARD, &b64)?),
            Err(_) => None,
        };
        AuthConfig {
            session_secret: load_secret("AUTH_SESSION_SECRET")?,
            password_pepper,
            ..AuthConfig::default()
        }
    };

    // Outbound mail: SMTP when configured, console otherwise
    let mailer: Arc<dyn Mailer> = match SmtpConfig::from_env() {
        Some(smtp_config) => match SmtpMailer::new(smtp_config) {
            Ok(smtp) => Arc::new(smtp),
            Err(e) => {
                tracing::warn!(error = %e, "SMTP unavailable, falling back to console mailer");
                Arc::new(ConsoleMailer::new())
            }
        },
        None => {
            tracing::info!("SMTP not configured, using console mailer");
            Arc::new(ConsoleMailer::new())
        }
    };

    // Repositories
    let grant_repo = PgGrantRepository::new(pool.clone());
    let auth_repo = PgAuthRepository::new(pool.clone());
    let item_repo = PgItemRepository::new(pool.clone());

    // Session middleware for protected routes
    let middleware_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };

    let portfolio_routes =
        portfolio_router(item_repo).layer(axum::middleware::from_fn(move |req, next| {
            let state = middleware_state.clone();
            async move { require_auth_session(state, req, next).await }
        }));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/access",
            access_router(grant_repo.clone(), mailer, access_config.clone()),
        )
        .nest(
            "/api/auth",
            auth_router(auth_repo, grant_repo, auth_config, access_config),
        )
        .nest("/api/portfolio", portfolio_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Decode a 32-byte base64 secret from the environment
fn load_secret(name: &str) -> anyhow::Result<[u8; 32]> {
    let b64 = env::var(name)
        .map_err(|_| anyhow::anyhow!("{name} must be set in production"))?;
    let bytes = Engine::decode(&general_purpose::STANDARD, &b64)?;
    let mut secret = [0u8; 32];
    if bytes.len() != secret.len() {
        anyhow::bail!("{name} must decode to exactly 32 bytes");
    }
    secret.copy_from_slice(&bytes);
    Ok(secret)
}
