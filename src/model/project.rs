use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "p-301",
        "client_id": "c-12",
        "name": "Warehouse revamp",
        "budget": 120000000.0,
        "start_date": "2024-01-15",
        "end_date": "2024-06-30",
        "status": "ACTIVE",
        "members": ["u-1001", "u-1002"]
    })
)]
pub struct Project {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub client_id: Option<String>,

    pub name: String,

    #[serde(default)]
    #[schema(example = 120000000.0, nullable = true)]
    pub budget: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    #[schema(example = "ACTIVE", nullable = true)]
    pub status: Option<String>,

    /// No consistency is enforced between members and task assignees.
    #[serde(default)]
    pub members: Vec<String>,
}

impl Record for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
