use std::net::TcpListener;

use actix_web::{dev::Server, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{middlewares::cors::build_cors, routes::configure_routes, settings::AppConfig, AppState};

/// Builds the HTTP server on an already bound listener.
pub fn run(
    listener: TcpListener,
    state: web::Data<AppState>,
    config: &AppConfig,
) -> std::io::Result<Server> {
    let allowed_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .listen(listener)?
    .workers(config.worker_count)
    .run();

    Ok(server)
}
