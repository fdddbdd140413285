use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::Record;

/// One payroll calculation result for a user and a calendar month.
///
/// Every calculation call persists a fresh record; repeated calls for the
/// same user/month/year produce additional records rather than updating an
/// existing one. Callers needing idempotency must de-duplicate by the
/// (user, month, year) key themselves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "pr-42",
        "user_id": "u-1001",
        "month": 3,
        "year": 2024,
        "base_salary": 8000000.0,
        "overtime_pay": 150000.0,
        "total_pay": 1150000.0,
        "is_paid": false,
        "transaction_id": null
    })
)]
pub struct Payroll {
    #[serde(default)]
    pub id: String,

    pub user_id: String,

    #[schema(example = 3, minimum = 1, maximum = 12)]
    pub month: u32,

    #[schema(example = 2024)]
    pub year: i32,

    /// Copied from the user's current record at calculation time.
    #[schema(example = 8000000.0)]
    pub base_salary: f64,

    #[schema(example = 150000.0)]
    pub overtime_pay: f64,

    #[schema(example = 1150000.0)]
    pub total_pay: f64,

    #[serde(default)]
    pub is_paid: bool,

    #[serde(default)]
    #[schema(nullable = true)]
    pub transaction_id: Option<String>,
}

impl Record for Payroll {
    const COLLECTION: &'static str = "payrolls";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
