use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Record;

/// Statuses that count a task as finished for progress purposes.
const TERMINAL_STATUSES: [&str; 2] = ["DONE", "COMPLETED"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "t-88",
        "project_id": "p-301",
        "assignee_id": "u-1001",
        "priority": "HIGH",
        "status": "IN_PROGRESS",
        "estimated_hours": 16.0
    })
)]
pub struct Task {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub assignee_id: Option<String>,

    #[serde(default)]
    #[schema(example = "HIGH", nullable = true)]
    pub priority: Option<String>,

    /// Free-form; "DONE" and "COMPLETED" are terminal, case-insensitively.
    #[serde(default)]
    #[schema(example = "IN_PROGRESS", nullable = true)]
    pub status: Option<String>,

    #[serde(default)]
    #[schema(example = 16.0, nullable = true)]
    pub estimated_hours: Option<f64>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| TERMINAL_STATUSES.iter().any(|t| s.eq_ignore_ascii_case(t)))
            .unwrap_or(false)
    }
}

impl Record for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
