pub mod monthly;
pub mod payroll;
pub mod progress;
pub mod work_log;

use chrono::{DateTime, Datelike, Local, Utc};

use crate::model::work_log::WorkLog;

/// Fixed divisor turning a monthly base salary into an hourly rate.
pub const STANDARD_MONTHLY_HOURS: f64 = 160.0;

/// True when the log's work date falls in the given calendar month, read in
/// the system time zone.
pub(crate) fn in_month(ts: DateTime<Utc>, month: u32, year: i32) -> bool {
    let local = ts.with_timezone(&Local);
    local.month() == month && local.year() == year
}

/// Work-log cost as the reporting paths compute it: always the monthly
/// divisor, whatever the user's salary type. Intentionally different from
/// the payroll calculator's type-aware rate; see `payroll::hourly_rate`.
pub(crate) fn reporting_log_cost(log: &WorkLog) -> f64 {
    let rate = if log.base_salary_snapshot > 0.0 {
        log.base_salary_snapshot / STANDARD_MONTHLY_HOURS
    } else {
        0.0
    };
    log.regular_hours * rate + log.overtime_hours * log.hourly_rate_ot_snapshot.unwrap_or(0.0)
}
