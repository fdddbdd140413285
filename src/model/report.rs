use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::payroll::Payroll;

/// Project risk tier derived from completion percentage and remaining time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Lightweight progress view of a single project. Never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgressReport {
    pub project_id: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Percentage, rounded half-up to 2 decimals.
    #[schema(example = 33.33)]
    pub progress: f64,
    /// Calendar days until the project end date, clamped at 0; absent when
    /// the project has no end date.
    #[schema(nullable = true)]
    pub days_remaining: Option<i64>,
    pub risk_level: RiskLevel,
}

/// Full project report: progress plus budget figures and breakdowns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectReport {
    pub project_id: String,
    pub project_name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    #[schema(example = 25.0)]
    pub progress: f64,
    #[schema(nullable = true)]
    pub days_remaining: Option<i64>,
    pub risk_level: RiskLevel,
    pub budget: f64,
    pub budget_used: f64,
    pub budget_remaining: f64,
    /// Task counts grouped by raw status string ("UNKNOWN" when absent).
    #[schema(value_type = Object)]
    pub tasks_by_status: BTreeMap<String, usize>,
    /// Total hours grouped by user id ("unknown" when absent).
    #[schema(value_type = Object)]
    pub hours_by_user: BTreeMap<String, f64>,
}

/// Organization-wide totals for one calendar month. Never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub total_payroll: f64,
    /// Placeholder until invoice aggregation is wired in; always zero.
    pub total_revenue: f64,
    /// Placeholder until expense aggregation is wired in; always zero.
    pub total_expenses: f64,
    pub profit: f64,
    /// Distinct project ids referenced by the month's work logs.
    pub active_projects: Vec<String>,
    /// Placeholder; per-user payroll detail is not aggregated yet.
    pub payrolls: Vec<Payroll>,
}
