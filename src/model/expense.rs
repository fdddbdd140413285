use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(example = "Server hosting")]
    pub description: String,

    #[schema(example = 450000.0)]
    pub amount: f64,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date")]
    pub spent_on: Option<NaiveDate>,
}

impl Record for Expense {
    const COLLECTION: &'static str = "expenses";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
