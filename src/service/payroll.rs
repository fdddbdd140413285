use tracing::{debug, info};

use crate::db::Database;
use crate::error::AppError;
use crate::model::payroll::Payroll;
use crate::model::user::SalaryType;
use crate::service::{STANDARD_MONTHLY_HOURS, in_month};

/// Effective hourly rate for one work log, from its frozen snapshot.
///
/// Hourly-basis users store their rate directly as the snapshot; everyone
/// else (monthly, or basis unknown) gets the monthly divisor.
pub(crate) fn hourly_rate(basis: SalaryType, snapshot: f64) -> f64 {
    match basis {
        SalaryType::Hourly => snapshot,
        SalaryType::Monthly => snapshot / STANDARD_MONTHLY_HOURS,
    }
}

/// Compute and persist a payroll record for one user and calendar month.
///
/// Pay is derived entirely from the work logs' salary snapshots; the user
/// record is read for the salary basis and for the `base_salary` field
/// copied onto the payroll. Each call persists a fresh record, even for a
/// user/month/year that was already calculated.
pub async fn calculate_payroll(
    db: &Database,
    user_id: &str,
    month: u32,
    year: i32,
) -> Result<Payroll, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!("month {month} out of range")));
    }
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id is required".into()));
    }

    let logs = db.worklogs.get_all().await?;
    let user = db
        .users
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))?;

    let basis = user.salary_basis();
    let mut regular_total = 0.0;
    let mut overtime_total = 0.0;
    let mut matched = 0usize;

    for log in logs.iter().filter(|l| {
        l.user_id.as_deref() == Some(user_id) && in_month(l.work_date, month, year)
    }) {
        let rate = hourly_rate(basis, log.base_salary_snapshot);
        regular_total += rate * log.regular_hours;
        let ot_rate = log.hourly_rate_ot_snapshot.unwrap_or(rate);
        overtime_total += ot_rate * log.overtime_hours;
        matched += 1;
    }

    debug!(user_id, month, year, matched, regular_total, overtime_total, "payroll computed");

    let payroll = Payroll {
        id: String::new(),
        user_id: user_id.to_string(),
        month,
        year,
        base_salary: user.base_salary,
        overtime_pay: overtime_total,
        total_pay: regular_total + overtime_total,
        is_paid: false,
        transaction_id: None,
    };

    let payroll = db.payrolls.create(payroll, None).await?;
    info!(user_id, month, year, payroll_id = %payroll.id, total = payroll.total_pay, "payroll persisted");
    Ok(payroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::reporting_log_cost;
    use crate::service::test_support::{local_midday, log_for, salaried_user};

    async fn seed_user(db: &Database, salary_type: Option<&str>, base: f64, ot: Option<f64>) {
        db.users
            .create(salaried_user("u-1", salary_type, base, ot), Some("u-1".into()))
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn monthly_basis_uses_the_160_hour_divisor() {
        let db = Database::new();
        seed_user(&db, Some("monthly"), 8_000_000.0, Some(75_000.0)).await;
        let log = log_for(
            "u-1",
            "p-1",
            local_midday(2024, 3, 12),
            20.0,
            2.0,
            8_000_000.0,
            Some(75_000.0),
        );
        db.worklogs.create(log, None).await.unwrap();

        let payroll = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        // 8,000,000 / 160 = 50,000/h; 20h regular + 2h at the OT snapshot
        assert_eq!(payroll.total_pay, 1_150_000.0);
        assert_eq!(payroll.overtime_pay, 150_000.0);
        assert_eq!(payroll.base_salary, 8_000_000.0);
        assert!(!payroll.is_paid);
        assert!(payroll.transaction_id.is_none());
    }

    #[actix_web::test]
    async fn hourly_basis_takes_the_snapshot_as_the_rate() {
        let db = Database::new();
        seed_user(&db, Some("hourly"), 1_200.0, None).await;
        let log = log_for("u-1", "p-1", local_midday(2024, 3, 5), 10.0, 3.0, 1_200.0, None);
        db.worklogs.create(log, None).await.unwrap();

        let payroll = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        // regular 10h * 1200; overtime falls back to the computed rate
        assert_eq!(payroll.total_pay, 12_000.0 + 3_600.0);
        assert_eq!(payroll.overtime_pay, 3_600.0);
    }

    #[actix_web::test]
    async fn month_boundary_is_inclusive_of_the_last_day_only() {
        let db = Database::new();
        seed_user(&db, Some("monthly"), 160_000.0, None).await;
        for (date, hours) in [
            (local_midday(2024, 3, 31), 5.0), // counts
            (local_midday(2024, 4, 1), 7.0),  // next month, ignored
            (local_midday(2023, 3, 15), 9.0), // same month, wrong year
        ] {
            let log = log_for("u-1", "p-1", date, hours, 0.0, 160_000.0, None);
            db.worklogs.create(log, None).await.unwrap();
        }

        let payroll = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        assert_eq!(payroll.total_pay, 5.0 * 1_000.0);
    }

    #[actix_web::test]
    async fn other_users_logs_do_not_contribute() {
        let db = Database::new();
        seed_user(&db, Some("monthly"), 160_000.0, None).await;
        db.users
            .create(
                salaried_user("u-2", Some("monthly"), 320_000.0, None),
                Some("u-2".into()),
            )
            .await
            .unwrap();
        let mine = log_for("u-1", "p-1", local_midday(2024, 3, 10), 4.0, 0.0, 160_000.0, None);
        let theirs = log_for("u-2", "p-1", local_midday(2024, 3, 10), 8.0, 0.0, 320_000.0, None);
        db.worklogs.create(mine, None).await.unwrap();
        db.worklogs.create(theirs, None).await.unwrap();

        let payroll = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        assert_eq!(payroll.total_pay, 4.0 * 1_000.0);
    }

    #[actix_web::test]
    async fn zero_matching_logs_yield_a_zeroed_payroll() {
        let db = Database::new();
        seed_user(&db, Some("monthly"), 8_000_000.0, None).await;

        let payroll = calculate_payroll(&db, "u-1", 6, 2024).await.unwrap();
        assert_eq!(payroll.total_pay, 0.0);
        assert_eq!(payroll.overtime_pay, 0.0);
        assert_eq!(payroll.base_salary, 8_000_000.0);
    }

    #[actix_web::test]
    async fn repeated_calculation_creates_a_second_record() {
        let db = Database::new();
        seed_user(&db, Some("monthly"), 8_000_000.0, None).await;

        let first = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        let second = calculate_payroll(&db, "u-1", 3, 2024).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(db.payrolls.get_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn unknown_user_fails_without_persisting() {
        let db = Database::new();
        let err = calculate_payroll(&db, "ghost", 3, 2024).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(db.payrolls.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn month_out_of_range_is_rejected() {
        let db = Database::new();
        let err = calculate_payroll(&db, "u-1", 13, 2024).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn payroll_and_reporting_rates_diverge_for_hourly_users() {
        // The calculator treats an hourly snapshot as the rate itself; the
        // reporting paths always divide by 160. Both are intentional.
        let log = log_for("u-1", "p-1", local_midday(2024, 3, 1), 10.0, 0.0, 1_200.0, None);
        let calculator_pay = hourly_rate(SalaryType::Hourly, log.base_salary_snapshot)
            * log.regular_hours;
        let reporting_cost = reporting_log_cost(&log);
        assert_eq!(calculator_pay, 12_000.0);
        assert_eq!(reporting_cost, 10.0 * 1_200.0 / 160.0);
        assert_ne!(calculator_pay, reporting_cost);
    }
}
