use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AppError;
use crate::model::invoice::Invoice;

#[derive(Deserialize, ToSchema)]
pub struct InvoicePayload {
    #[schema(nullable = true)]
    pub client_id: Option<String>,

    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(example = 2500000.0)]
    pub amount: f64,

    #[schema(example = "UNPAID", nullable = true)]
    pub status: Option<String>,

    #[schema(value_type = Option<String>, format = "date")]
    pub due_date: Option<NaiveDate>,
}

impl InvoicePayload {
    fn into_invoice(self, id: String) -> Invoice {
        Invoice {
            id,
            client_id: self.client_id,
            project_id: self.project_id,
            amount: self.amount,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/invoices",
    request_body = InvoicePayload,
    responses((status = 201, body = Invoice)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn create(
    db: web::Data<Database>,
    payload: web::Json<InvoicePayload>,
) -> Result<HttpResponse, AppError> {
    let invoice = db
        .invoices
        .create(payload.into_inner().into_invoice(String::new()), None)
        .await?;
    Ok(HttpResponse::Created().json(invoice))
}

#[utoipa::path(
    get,
    path = "/api/invoices",
    responses((status = 200, body = [Invoice])),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.invoices.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    params(("id", description = "Invoice id")),
    responses((status = 200, body = Invoice), (status = 404)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn get(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let invoice = db
        .invoices
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {id}")))?;
    Ok(HttpResponse::Ok().json(invoice))
}

#[utoipa::path(
    put,
    path = "/api/invoices/{id}",
    request_body = InvoicePayload,
    params(("id", description = "Invoice id")),
    responses((status = 200, body = Invoice), (status = 404)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn update(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<InvoicePayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let invoice = payload.into_inner().into_invoice(id.clone());
    db.invoices.update(&id, invoice.clone()).await?;
    Ok(HttpResponse::Ok().json(invoice))
}

#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    params(("id", description = "Invoice id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Billing"
)]
pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.invoices.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Invoice deleted" })))
}
