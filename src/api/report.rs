use actix_web::{HttpResponse, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::db::Database;
use crate::error::AppError;
use crate::model::report::{MonthlyReport, ProgressReport, ProjectReport};
use crate::service::{monthly, progress};

#[derive(Deserialize, IntoParams)]
pub struct MonthQuery {
    #[param(example = 3)]
    pub month: u32,

    #[param(example = 2024)]
    pub year: i32,
}

#[utoipa::path(
    get,
    path = "/api/reports/progress/{project_id}",
    params(("project_id", description = "Project id")),
    responses(
        (status = 200, body = ProgressReport),
        (status = 404, description = "Project not found")
    ),
    security(("caller_id" = [])),
    tag = "Reports"
)]
pub async fn project_progress(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let report = progress::progress_report(&db, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}

#[utoipa::path(
    get,
    path = "/api/reports/project/{project_id}",
    params(("project_id", description = "Project id")),
    responses(
        (status = 200, body = ProjectReport),
        (status = 404, description = "Project not found")
    ),
    security(("caller_id" = [])),
    tag = "Reports"
)]
pub async fn project_full(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let report = progress::project_report(&db, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}

#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    params(MonthQuery),
    responses(
        (status = 200, body = MonthlyReport),
        (status = 400, description = "Month out of range")
    ),
    security(("caller_id" = [])),
    tag = "Reports"
)]
pub async fn monthly_summary(
    db: web::Data<Database>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse, AppError> {
    let report = monthly::monthly_report(&db, query.month, query.year).await?;
    Ok(HttpResponse::Ok().json(report))
}
