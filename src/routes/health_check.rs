use actix_web::HttpResponse;

/// Liveness probe. Does not touch the database.
#[tracing::instrument(name = "Liveness probe")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
