use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::db::Record;
use crate::model::role::Role;

/// How a user's `base_salary` figure is to be read.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SalaryType {
    Monthly,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "u-1001",
        "name": "Rahim Uddin",
        "email": "rahim@company.com",
        "phone": "+8801712345678",
        "role": "EMPLOYEE",
        "salary_type": "monthly",
        "base_salary": 8000000.0,
        "overtime_hourly_rate": 75000.0
    })
)]
pub struct User {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[schema(format = "email")]
    pub email: String,

    #[serde(default)]
    #[schema(nullable = true)]
    pub phone: Option<String>,

    /// Free-form in the store; matched case-insensitively by the gate.
    #[serde(default)]
    #[schema(example = "EMPLOYEE", nullable = true)]
    pub role: Option<String>,

    /// "monthly" or "hourly"; anything else is treated as monthly.
    #[serde(default)]
    #[schema(example = "monthly", nullable = true)]
    pub salary_type: Option<String>,

    #[serde(default)]
    #[schema(example = 8000000.0)]
    pub base_salary: f64,

    #[serde(default)]
    #[schema(example = 75000.0, nullable = true)]
    pub overtime_hourly_rate: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| Role::from_str(r).ok())
    }

    /// Missing or unrecognized salary types fall back to the monthly basis.
    pub fn salary_basis(&self) -> SalaryType {
        match self.salary_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case("hourly") => SalaryType::Hourly,
            _ => SalaryType::Monthly,
        }
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(salary_type: Option<&str>) -> User {
        User {
            id: "u1".into(),
            name: "Test".into(),
            email: "t@example.com".into(),
            phone: None,
            role: None,
            salary_type: salary_type.map(Into::into),
            base_salary: 0.0,
            overtime_hourly_rate: None,
            created_at: None,
        }
    }

    #[test]
    fn salary_basis_defaults_to_monthly() {
        assert_eq!(user_with(None).salary_basis(), SalaryType::Monthly);
        assert_eq!(user_with(Some("weekly")).salary_basis(), SalaryType::Monthly);
        assert_eq!(user_with(Some("HOURLY")).salary_basis(), SalaryType::Hourly);
        assert_eq!(user_with(Some("hourly")).salary_basis(), SalaryType::Hourly);
    }
}
