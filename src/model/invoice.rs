use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Invoice {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub client_id: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub project_id: Option<String>,

    #[schema(example = 2500000.0)]
    pub amount: f64,

    #[serde(default)]
    #[schema(example = "UNPAID", nullable = true)]
    pub status: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date")]
    pub due_date: Option<NaiveDate>,
}

impl Record for Invoice {
    const COLLECTION: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
