use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::db::Database;
use crate::error::AppError;
use crate::model::task::Task;

#[derive(Deserialize, ToSchema)]
pub struct TaskPayload {
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(nullable = true)]
    pub assignee_id: Option<String>,

    #[schema(example = "HIGH", nullable = true)]
    pub priority: Option<String>,

    #[schema(example = "IN_PROGRESS", nullable = true)]
    pub status: Option<String>,

    #[schema(example = 16.0, nullable = true)]
    pub estimated_hours: Option<f64>,
}

impl TaskPayload {
    fn into_task(self, id: String) -> Task {
        Task {
            id,
            project_id: self.project_id,
            assignee_id: self.assignee_id,
            priority: self.priority,
            status: self.status,
            estimated_hours: self.estimated_hours,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct TaskQuery {
    /// Restrict the listing to one project.
    pub project_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskPayload,
    responses((status = 201, body = Task), (status = 403)),
    security(("caller_id" = [])),
    tag = "Tasks"
)]
pub async fn create_task(
    db: web::Data<Database>,
    payload: web::Json<TaskPayload>,
) -> Result<HttpResponse, AppError> {
    let task = db
        .tasks
        .create(payload.into_inner().into_task(String::new()), None)
        .await?;
    Ok(HttpResponse::Created().json(task))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQuery),
    responses((status = 200, body = [Task])),
    security(("caller_id" = [])),
    tag = "Tasks"
)]
pub async fn list_tasks(
    db: web::Data<Database>,
    query: web::Query<TaskQuery>,
) -> Result<HttpResponse, AppError> {
    let tasks = match &query.project_id {
        Some(project_id) => db.tasks.find_eq("project_id", project_id, None).await?,
        None => db.tasks.get_all().await?,
    };
    Ok(HttpResponse::Ok().json(tasks))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id", description = "Task id")),
    responses((status = 200, body = Task), (status = 404)),
    security(("caller_id" = [])),
    tag = "Tasks"
)]
pub async fn get_task(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let task = db
        .tasks
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("task {id}")))?;
    Ok(HttpResponse::Ok().json(task))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    request_body = TaskPayload,
    params(("id", description = "Task id")),
    responses((status = 200, body = Task), (status = 404)),
    security(("caller_id" = [])),
    tag = "Tasks"
)]
pub async fn update_task(
    db: web::Data<Database>,
    path: web::Path<String>,
    payload: web::Json<TaskPayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let task = payload.into_inner().into_task(id.clone());
    db.tasks.update(&id, task.clone()).await?;
    Ok(HttpResponse::Ok().json(task))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id", description = "Task id")),
    responses((status = 200)),
    security(("caller_id" = [])),
    tag = "Tasks"
)]
pub async fn delete_task(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    db.tasks.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted" })))
}
