use chrono::{DateTime, Utc};
use tracing::debug;

use crate::db::Database;
use crate::error::AppError;
use crate::model::work_log::WorkLog;

/// Fields a caller supplies when logging hours. Snapshot fields are not
/// accepted from outside; they are resolved here.
pub struct NewWorkLog {
    pub task_id: Option<String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub work_date: DateTime<Utc>,
}

/// Create a work log, freezing the acting user's current salary figures
/// into the log's snapshot fields.
///
/// The user read must complete before the write is attempted: a missing
/// user id or an unknown user aborts with nothing persisted, and the
/// snapshots are never refreshed after this point.
pub async fn create_work_log(db: &Database, input: NewWorkLog) -> Result<WorkLog, AppError> {
    let user_id = input
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;

    let user = db
        .users
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))?;

    debug!(%user_id, base_salary = user.base_salary, "freezing salary snapshot");

    let log = WorkLog {
        id: String::new(),
        task_id: input.task_id,
        user_id: Some(user_id),
        project_id: input.project_id,
        regular_hours: input.regular_hours,
        overtime_hours: input.overtime_hours,
        work_date: input.work_date,
        base_salary_snapshot: user.base_salary,
        hourly_rate_ot_snapshot: user.overtime_hourly_rate,
    };

    Ok(db.worklogs.create(log, None).await?)
}
