use actix_web::{HttpResponse, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AppError;
use crate::model::payroll::Payroll;
use crate::service::payroll::calculate_payroll;

#[derive(Deserialize, ToSchema)]
pub struct CalculatePayroll {
    #[schema(example = "u-1001")]
    pub user_id: String,

    #[schema(example = 3, minimum = 1, maximum = 12)]
    pub month: u32,

    #[schema(example = 2024)]
    pub year: i32,
}

/// Runs the payroll calculation and persists the result. Calling this
/// twice for the same user and month creates two records.
#[utoipa::path(
    post,
    path = "/api/payrolls/calculate",
    request_body = CalculatePayroll,
    responses(
        (status = 201, body = Payroll),
        (status = 400, description = "Month out of range or missing user id"),
        (status = 404, description = "User not found")
    ),
    security(("caller_id" = [])),
    tag = "Payroll"
)]
pub async fn calculate(
    db: web::Data<Database>,
    payload: web::Json<CalculatePayroll>,
) -> Result<HttpResponse, AppError> {
    let payroll = calculate_payroll(&db, &payload.user_id, payload.month, payload.year).await?;
    Ok(HttpResponse::Created().json(payroll))
}

#[utoipa::path(
    get,
    path = "/api/payrolls",
    responses((status = 200, body = [Payroll])),
    security(("caller_id" = [])),
    tag = "Payroll"
)]
pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.payrolls.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/payrolls/{id}",
    params(("id", description = "Payroll id")),
    responses((status = 200, body = Payroll), (status = 404)),
    security(("caller_id" = [])),
    tag = "Payroll"
)]
pub async fn get(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payroll = db
        .payrolls
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("payroll {id}")))?;
    Ok(HttpResponse::Ok().json(payroll))
}
