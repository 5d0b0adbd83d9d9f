use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::newsletter::Newsletter;
use crate::domain::newsletter_content::{parse_content, ContentBlock};
use crate::services::newsletters::{get_published_newsletter, list_newsletters};
use crate::services::ServiceError;

#[derive(Deserialize, Debug)]
pub struct NewsletterQuery {
    pub category: Option<String>,
}

#[derive(serde::Serialize)]
pub struct NewsletterDetails {
    #[serde(flatten)]
    pub newsletter: Newsletter,
    pub blocks: Vec<ContentBlock>,
}

#[tracing::instrument(
    name = "List newsletters handler",
    skip(db_pool),
    fields(category = ?query.category)
)]
pub async fn handle_list_newsletters(
    query: web::Query<NewsletterQuery>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let newsletters = list_newsletters(&db_pool, query.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(newsletters))
}

#[tracing::instrument(name = "Get newsletter handler", skip(db_pool))]
pub async fn handle_get_newsletter(
    path: web::Path<Uuid>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let newsletter = get_published_newsletter(&db_pool, path.into_inner()).await?;
    let blocks = parse_content(&newsletter.content);

    Ok(HttpResponse::Ok().json(NewsletterDetails { newsletter, blocks }))
}
