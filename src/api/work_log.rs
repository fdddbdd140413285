use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::auth::gate::AuthUser;
use crate::db::Database;
use crate::error::AppError;
use crate::model::work_log::WorkLog;
use crate::service::work_log::{NewWorkLog, create_work_log};

/// Snapshot fields are not accepted here; the service freezes them from
/// the referenced user's current record.
#[derive(Deserialize, ToSchema)]
pub struct CreateWorkLog {
    #[schema(nullable = true)]
    pub task_id: Option<String>,

    /// Defaults to the calling user when omitted.
    #[schema(nullable = true)]
    pub user_id: Option<String>,

    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(example = 8.0)]
    #[serde(default)]
    pub regular_hours: f64,

    #[schema(example = 2.0)]
    #[serde(default)]
    pub overtime_hours: f64,

    #[schema(value_type = String, format = "date-time")]
    pub work_date: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams)]
pub struct WorkLogQuery {
    /// Restrict the listing to one project.
    pub project_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/worklogs",
    request_body = CreateWorkLog,
    responses(
        (status = 201, body = WorkLog),
        (status = 400, description = "Missing user id"),
        (status = 404, description = "Referenced user not found")
    ),
    security(("caller_id" = [])),
    tag = "WorkLogs"
)]
pub async fn create(
    auth: AuthUser,
    db: web::Data<Database>,
    payload: web::Json<CreateWorkLog>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let input = NewWorkLog {
        task_id: payload.task_id,
        user_id: payload.user_id.or(Some(auth.user_id)),
        project_id: payload.project_id,
        regular_hours: payload.regular_hours,
        overtime_hours: payload.overtime_hours,
        work_date: payload.work_date,
    };
    let log = create_work_log(&db, input).await?;
    Ok(HttpResponse::Created().json(log))
}

#[utoipa::path(
    get,
    path = "/api/worklogs",
    params(WorkLogQuery),
    responses((status = 200, body = [WorkLog])),
    security(("caller_id" = [])),
    tag = "WorkLogs"
)]
pub async fn list(
    db: web::Data<Database>,
    query: web::Query<WorkLogQuery>,
) -> Result<HttpResponse, AppError> {
    let logs = match &query.project_id {
        Some(project_id) => db.worklogs.find_eq("project_id", project_id, None).await?,
        None => db.worklogs.get_all().await?,
    };
    Ok(HttpResponse::Ok().json(logs))
}

#[utoipa::path(
    get,
    path = "/api/worklogs/{id}",
    params(("id", description = "Work log id")),
    responses((status = 200, body = WorkLog), (status = 404)),
    security(("caller_id" = [])),
    tag = "WorkLogs"
)]
pub async fn get(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let log = db
        .worklogs
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("work log {id}")))?;
    Ok(HttpResponse::Ok().json(log))
}

#[utoipa::path(
    delete,
    path = "/api/worklogs/{id}",
    params(("id", description = "Work log id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "WorkLogs"
)]
pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.worklogs.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Work log deleted" })))
}
