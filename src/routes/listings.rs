use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::services::listings::{
    list_active_events, list_active_professors, list_active_team_members, list_published_media,
};
use crate::services::ServiceError;

#[derive(Deserialize, Debug)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RoleQuery {
    pub role: Option<String>,
}

#[tracing::instrument(name = "List team handler", skip(db_pool))]
pub async fn handle_list_team(db_pool: web::Data<PgPool>) -> Result<HttpResponse, ServiceError> {
    let members = list_active_team_members(&db_pool).await?;

    Ok(HttpResponse::Ok().json(members))
}

#[tracing::instrument(name = "List professors handler", skip(db_pool), fields(role = ?query.role))]
pub async fn handle_list_professors(
    query: web::Query<RoleQuery>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let professors = list_active_professors(&db_pool, query.role.as_deref()).await?;

    Ok(HttpResponse::Ok().json(professors))
}

#[tracing::instrument(name = "List events handler", skip(db_pool), fields(category = ?query.category))]
pub async fn handle_list_events(
    query: web::Query<CategoryQuery>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let events = list_active_events(&db_pool, query.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(events))
}

#[tracing::instrument(name = "List media handler", skip(db_pool), fields(category = ?query.category))]
pub async fn handle_list_media(
    query: web::Query<CategoryQuery>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let items = list_published_media(&db_pool, query.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(items))
}
