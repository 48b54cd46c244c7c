//! Crewly HR administration API server.
//!
//! Boots the HTTP listener, runs database migrations, and mounts the
//! employee administration routes behind JWT authentication.

mod config;
mod logging;
mod openapi;

use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crewly_api_employees::{
    employees_router, EmailSender, EmployeesState, MockEmailSender, SmtpEmailSender,
};
use crewly_auth::{jwt_auth_middleware, JwtVerifier};
use crewly_db::{connect_pool, run_migrations};

use crate::config::Config;
use crate::logging::init_logging;
use crate::openapi::swagger_routes;

/// Token issuer baked into access tokens.
const JWT_ISSUER: &str = "crewly";

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    init_logging(&config.log_filter);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting crewly-api"
    );

    let pool = match connect_pool(&config.database_url, config.max_db_connections).await {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "Failed to connect to the database");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool).await {
        error!(error = %err, "Failed to run database migrations");
        std::process::exit(1);
    }
    info!("Database migrations applied");

    let email_sender: Arc<dyn EmailSender> = match &config.smtp {
        Some(smtp) => match SmtpEmailSender::new(smtp) {
            Ok(sender) => {
                info!(smtp_host = %smtp.host, "Using SMTP email delivery");
                Arc::new(sender)
            }
            Err(err) => {
                error!(error = %err, "Failed to build SMTP transport");
                std::process::exit(1);
            }
        },
        None => {
            warn!("SMTP_HOST not set, outgoing email is captured in memory");
            Arc::new(MockEmailSender::new())
        }
    };

    let verifier = Arc::new(JwtVerifier::new(&config.jwt_secret, JWT_ISSUER));

    let employees_state = EmployeesState::new(
        pool.clone(),
        email_sender,
        config.frontend_url.clone(),
        config.reset_password_path.clone(),
    );

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(swagger_routes())
        .nest(
            "/api/employees",
            employees_router(employees_state)
                .layer(axum::middleware::from_fn(jwt_auth_middleware))
                .layer(Extension(verifier)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(err) => {
            error!(error = %err, "Invalid bind address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, addr = %addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "Listening");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}

/// Liveness probe. Reports the service name and version.
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
