use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::db::Database;
use crate::error::AppError;
use crate::model::user::User;

/// Full user payload; also used for PUT, which is a whole-record overwrite.
#[derive(Deserialize, ToSchema)]
pub struct UserPayload {
    #[schema(example = "Rahim Uddin")]
    pub name: String,

    #[schema(example = "rahim@company.com", format = "email")]
    pub email: String,

    #[schema(nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "EMPLOYEE", nullable = true)]
    pub role: Option<String>,

    #[schema(example = "monthly", nullable = true)]
    pub salary_type: Option<String>,

    #[schema(example = 8000000.0)]
    #[serde(default)]
    pub base_salary: f64,

    #[schema(example = 75000.0, nullable = true)]
    pub overtime_hourly_rate: Option<f64>,
}

impl UserPayload {
    fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            salary_type: self.salary_type,
            base_salary: self.base_salary,
            overtime_hourly_rate: self.overtime_hourly_rate,
            created_at: Some(Utc::now()),
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct EmailQuery {
    #[param(example = "rahim@company.com")]
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserPayload,
    responses(
        (status = 201, body = User),
        (status = 401),
        (status = 403)
    ),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn create_user(
    db: web::Data<Database>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let user = db
        .users
        .create(payload.into_inner().into_user(String::new()), None)
        .await?;
    info!(user_id = %user.id, "user created");
    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, body = [User])),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn list_users(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.users.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/by-email",
    params(EmailQuery),
    responses(
        (status = 200, body = User),
        (status = 404)
    ),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn find_user_by_email(
    db: web::Data<Database>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let hits = db.users.find_eq("email", &query.email, Some(1)).await?;
    match hits.into_iter().next() {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound(format!("user with email {}", query.email))),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id", description = "User id")),
    responses(
        (status = 200, body = User),
        (status = 404)
    ),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn get_user(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = db
        .users
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    request_body = UserPayload,
    params(("id", description = "User id")),
    responses(
        (status = 200, body = User),
        (status = 404)
    ),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn update_user(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = payload.into_inner().into_user(id.clone());
    db.users.update(&id, user.clone()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id", description = "User id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.users.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
}
