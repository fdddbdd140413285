use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AppError;
use crate::model::client::Client;

#[derive(Deserialize, ToSchema)]
pub struct ClientPayload {
    #[schema(example = "Acme Trading Ltd.")]
    pub name: String,

    #[schema(format = "email", nullable = true)]
    pub email: Option<String>,

    #[schema(nullable = true)]
    pub phone: Option<String>,

    #[schema(nullable = true)]
    pub address: Option<String>,
}

impl ClientPayload {
    fn into_client(self, id: String) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = ClientPayload,
    responses((status = 201, body = Client)),
    security(("caller_id" = [])),
    tag = "Clients"
)]
pub async fn create(
    db: web::Data<Database>,
    payload: web::Json<ClientPayload>,
) -> Result<HttpResponse, AppError> {
    let client = db
        .clients
        .create(payload.into_inner().into_client(String::new()), None)
        .await?;
    Ok(HttpResponse::Created().json(client))
}

#[utoipa::path(
    get,
    path = "/api/clients",
    responses((status = 200, body = [Client])),
    security(("caller_id" = [])),
    tag = "Clients"
)]
pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.clients.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id", description = "Client id")),
    responses((status = 200, body = Client), (status = 404)),
    security(("caller_id" = [])),
    tag = "Clients"
)]
pub async fn get(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let client = db
        .clients
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client {id}")))?;
    Ok(HttpResponse::Ok().json(client))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    request_body = ClientPayload,
    params(("id", description = "Client id")),
    responses((status = 200, body = Client), (status = 404)),
    security(("caller_id" = [])),
    tag = "Clients"
)]
pub async fn update(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<ClientPayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let client = payload.into_inner().into_client(id.clone());
    db.clients.update(&id, client.clone()).await?;
    Ok(HttpResponse::Ok().json(client))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(("id", description = "Client id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Clients"
)]
pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.clients.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Client deleted" })))
}
