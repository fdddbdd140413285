use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Record;

/// A recorded block of hours spent on a task, split into regular and
/// overtime components.
///
/// The two snapshot fields are copied from the user record once, when the
/// log is created, and are never refreshed afterwards; all downstream pay
/// computation reads the snapshots, not the user's current salary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "w-5001",
        "task_id": "t-88",
        "user_id": "u-1001",
        "project_id": "p-301",
        "regular_hours": 8.0,
        "overtime_hours": 2.0,
        "work_date": "2024-03-12T09:00:00Z",
        "base_salary_snapshot": 8000000.0,
        "hourly_rate_ot_snapshot": 75000.0
    })
)]
pub struct WorkLog {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub task_id: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub user_id: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schema(example = 8.0)]
    pub regular_hours: f64,

    #[serde(default)]
    #[schema(example = 2.0)]
    pub overtime_hours: f64,

    #[schema(value_type = String, format = "date-time")]
    pub work_date: DateTime<Utc>,

    #[serde(default)]
    #[schema(example = 8000000.0)]
    pub base_salary_snapshot: f64,

    #[serde(default)]
    #[schema(example = 75000.0, nullable = true)]
    pub hourly_rate_ot_snapshot: Option<f64>,
}

impl Record for WorkLog {
    const COLLECTION: &'static str = "worklogs";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
