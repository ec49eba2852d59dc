//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use user_registry::Trace;
#[cfg(debug_assertions)]
use user_registry::doc::ApiDoc;
use user_registry::domain::UserRegistrationService;
use user_registry::domain::ports::{UserRegistration, UserRepository};
use user_registry::inbound::http::health::{HealthState, live, ready};
use user_registry::inbound::http::state::HttpState;
use user_registry::inbound::http::users::create_user;
use user_registry::outbound::memory::InMemoryUserRepository;
use user_registry::outbound::persistence::{DbPool, DieselUserRepository, run_pending_migrations};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Prepare the server configuration from loaded settings.
///
/// With a database URL, pending migrations are applied and a connection pool
/// is attached. Without one the server keeps records in memory.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be built.
pub async fn prepare_config(settings: &ServerSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; registered users are kept in memory");
        return Ok(config);
    };

    run_pending_migrations(database_url.to_owned())
        .await
        .map_err(|err| std::io::Error::other(format!("database migration failed: {err}")))?;

    let pool = DbPool::connect(database_url, settings.pool_max_size)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(max_size = settings.pool_max_size, "database pool ready");

    Ok(config.with_db_pool(pool))
}

/// Select the repository backing the registration service.
fn build_repository(db_pool: Option<DbPool>) -> Arc<dyn UserRepository> {
    match db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool)),
        None => Arc::new(InMemoryUserRepository::new()),
    }
}

fn build_http_state(db_pool: Option<DbPool>) -> web::Data<HttpState> {
    let registration: Arc<dyn UserRegistration> =
        Arc::new(UserRegistrationService::new(build_repository(db_pool)));
    web::Data::new(HttpState::new(registration))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(create_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness flag is raised once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = build_http_state(db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
