use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AppError;
use crate::model::expense::Expense;

#[derive(Deserialize, ToSchema)]
pub struct ExpensePayload {
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(example = "Server hosting")]
    pub description: String,

    #[schema(example = 450000.0)]
    pub amount: f64,

    #[schema(value_type = Option<String>, format = "date")]
    pub spent_on: Option<NaiveDate>,
}

impl ExpensePayload {
    fn into_expense(self, id: String) -> Expense {
        Expense {
            id,
            project_id: self.project_id,
            description: self.description,
            amount: self.amount,
            spent_on: self.spent_on,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = ExpensePayload,
    responses((status = 201, body = Expense)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn create(
    db: web::Data<Database>,
    payload: web::Json<ExpensePayload>,
) -> Result<HttpResponse, AppError> {
    let expense = db
        .expenses
        .create(payload.into_inner().into_expense(String::new()), None)
        .await?;
    Ok(HttpResponse::Created().json(expense))
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    responses((status = 200, body = [Expense])),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.expenses.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    params(("id", description = "Expense id")),
    responses((status = 200, body = Expense), (status = 404)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn get(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let expense = db
        .expenses
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("expense {id}")))?;
    Ok(HttpResponse::Ok().json(expense))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    request_body = ExpensePayload,
    params(("id", description = "Expense id")),
    responses((status = 200, body = Expense), (status = 404)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn update(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<ExpensePayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let expense = payload.into_inner().into_expense(id.clone());
    db.expenses.update(&id, expense.clone()).await?;
    Ok(HttpResponse::Ok().json(expense))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    params(("id", description = "Expense id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.expenses.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Expense deleted" })))
}
