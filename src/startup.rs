use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::{DatabaseSettings, Settings};
use crate::routes::{
    handle_contact, handle_get_newsletter, handle_list_events, handle_list_media,
    handle_list_newsletters, handle_list_professors, handle_list_team, handle_register_volunteer,
    handle_subscribe, handle_unsubscribe, health_check, ApiResponse,
};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let db_pool = get_connection_db_pool(&config.database);
        let listener = TcpListener::bind(config.get_address())?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db_pool)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, db_pool: PgPool) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);

    let server = HttpServer::new(move || {
        App::new()
            // One span per request, carrying a request id into every handler log line.
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/health_check", web::get().to(health_check))
            .route("/newsletter/subscribe", web::post().to(handle_subscribe))
            .route("/newsletter/unsubscribe", web::post().to(handle_unsubscribe))
            .route("/newsletters", web::get().to(handle_list_newsletters))
            .route("/newsletters/{id}", web::get().to(handle_get_newsletter))
            .route("/team", web::get().to(handle_list_team))
            .route("/professors", web::get().to(handle_list_professors))
            .route("/events", web::get().to(handle_list_events))
            .route("/media", web::get().to(handle_list_media))
            .route("/contact", web::post().to(handle_contact))
            .route("/volunteers", web::post().to(handle_register_volunteer))
            .app_data(db_pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Unparseable bodies get the same envelope as validation failures.
fn json_error_handler(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request body: {}", err);
    let response = HttpResponse::BadRequest().json(ApiResponse::failure(&err.to_string()));

    InternalError::from_response(err, response).into()
}

/// A path segment of the wrong shape, such as a newsletter id that is not a UUID, names
/// nothing that exists.
fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request path {}: {}", req.path(), err);
    let response = HttpResponse::NotFound()
        .json(ApiResponse::failure(&format!("{} was not found.", req.path())));

    InternalError::from_response(err, response).into()
}

pub fn get_connection_db_pool(config: &DatabaseSettings) -> Pool<Postgres> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.get_acquire_timeout())
        .connect_lazy_with(config.get_db_options())
}
