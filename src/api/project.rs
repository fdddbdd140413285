use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AppError;
use crate::model::project::Project;

#[derive(Deserialize, ToSchema)]
pub struct ProjectPayload {
    #[schema(example = "Warehouse revamp")]
    pub name: String,

    #[schema(nullable = true)]
    pub client_id: Option<String>,

    #[schema(example = 120000000.0, nullable = true)]
    pub budget: Option<f64>,

    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = "ACTIVE", nullable = true)]
    pub status: Option<String>,

    #[serde(default)]
    pub members: Vec<String>,
}

impl ProjectPayload {
    fn into_project(self, id: String) -> Project {
        Project {
            id,
            client_id: self.client_id,
            name: self.name,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            members: self.members,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectPayload,
    responses((status = 201, body = Project), (status = 403)),
    security(("caller_id" = [])),
    tag = "Projects"
)]
pub async fn create_project(
    db: web::Data<Database>,
    payload: web::Json<ProjectPayload>,
) -> Result<HttpResponse, AppError> {
    let project = db
        .projects
        .create(payload.into_inner().into_project(String::new()), None)
        .await?;
    info!(project_id = %project.id, "project created");
    Ok(HttpResponse::Created().json(project))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, body = [Project])),
    security(("caller_id" = [])),
    tag = "Projects"
)]
pub async fn list_projects(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(db.projects.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id", description = "Project id")),
    responses((status = 200, body = Project), (status = 404)),
    security(("caller_id" = [])),
    tag = "Projects"
)]
pub async fn get_project(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let project = db
        .projects
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project {id}")))?;
    Ok(HttpResponse::Ok().json(project))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    request_body = ProjectPayload,
    params(("id", description = "Project id")),
    responses((status = 200, body = Project), (status = 404)),
    security(("caller_id" = [])),
    tag = "Projects"
)]
pub async fn update_project(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<ProjectPayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let project = payload.into_inner().into_project(id.clone());
    db.projects.update(&id, project.clone()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id", description = "Project id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Projects"
)]
pub async fn delete_project(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.projects.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Project deleted" })))
}
