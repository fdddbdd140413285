use chrono::Local;
use futures::try_join;
use std::collections::BTreeMap;
use tracing::debug;

use crate::db::Database;
use crate::error::AppError;
use crate::model::project::Project;
use crate::model::report::{ProgressReport, ProjectReport, RiskLevel};
use crate::model::task::Task;
use crate::model::work_log::WorkLog;
use crate::service::reporting_log_cost;

/// Round half-up to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completion percentage over a task list; 0 when there are no tasks.
fn completion(tasks: &[Task]) -> (usize, f64) {
    let completed = tasks.iter().filter(|t| t.is_done()).count();
    let progress = if tasks.is_empty() {
        0.0
    } else {
        round2(100.0 * completed as f64 / tasks.len() as f64)
    };
    (completed, progress)
}

/// Calendar days until the project end date, clamped at zero. `None` when
/// the project carries no end date.
fn days_remaining(project: &Project) -> Option<i64> {
    let end = project.end_date?;
    let today = Local::now().date_naive();
    Some(end.signed_duration_since(today).num_days().max(0))
}

/// HIGH wins over MEDIUM: a barely-started project with little or unknown
/// runway is high-risk even though its progress alone would read MEDIUM.
pub(crate) fn risk_level(progress: f64, days_remaining: Option<i64>) -> RiskLevel {
    if progress < 50.0 && days_remaining.is_none_or(|d| d < 7) {
        RiskLevel::High
    } else if progress < 75.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

async fn fetch_project_inputs(
    db: &Database,
    project_id: &str,
) -> Result<(Project, Vec<Task>, Vec<WorkLog>), AppError> {
    // Fan-out: the three reads are independent; fail the whole report if
    // any of them does.
    let (project, tasks, logs) = try_join!(
        db.projects.get(project_id),
        db.tasks.find_eq("project_id", project_id, None),
        db.worklogs.find_eq("project_id", project_id, None),
    )?;
    let project =
        project.ok_or_else(|| AppError::NotFound(format!("project {project_id}")))?;
    Ok((project, tasks, logs))
}

/// Progress and risk view of one project.
pub async fn progress_report(db: &Database, project_id: &str) -> Result<ProgressReport, AppError> {
    let (project, tasks, _logs) = fetch_project_inputs(db, project_id).await?;
    let (completed, progress) = completion(&tasks);
    let days = days_remaining(&project);
    debug!(project_id, progress, ?days, "progress evaluated");
    Ok(ProgressReport {
        project_id: project.id,
        total_tasks: tasks.len(),
        completed_tasks: completed,
        progress,
        days_remaining: days,
        risk_level: risk_level(progress, days),
    })
}

/// Full project report: progress plus budget burn and breakdowns.
///
/// Budget burn always uses the monthly-divisor rate, matching the monthly
/// aggregator and deliberately not the payroll calculator's type-aware
/// branch.
pub async fn project_report(db: &Database, project_id: &str) -> Result<ProjectReport, AppError> {
    let (project, tasks, logs) = fetch_project_inputs(db, project_id).await?;
    let (completed, progress) = completion(&tasks);
    let days = days_remaining(&project);

    let budget_used: f64 = logs.iter().map(reporting_log_cost).sum();
    let budget = project.budget.unwrap_or(0.0);

    let mut tasks_by_status: BTreeMap<String, usize> = BTreeMap::new();
    for task in &tasks {
        let status = task.status.clone().unwrap_or_else(|| "UNKNOWN".into());
        *tasks_by_status.entry(status).or_insert(0) += 1;
    }

    let mut hours_by_user: BTreeMap<String, f64> = BTreeMap::new();
    for log in &logs {
        let user = log.user_id.clone().unwrap_or_else(|| "unknown".into());
        *hours_by_user.entry(user).or_insert(0.0) += log.regular_hours + log.overtime_hours;
    }

    Ok(ProjectReport {
        project_id: project.id,
        project_name: project.name,
        total_tasks: tasks.len(),
        completed_tasks: completed,
        progress,
        days_remaining: days,
        risk_level: risk_level(progress, days),
        budget,
        budget_used,
        budget_remaining: budget - budget_used,
        tasks_by_status,
        hours_by_user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{local_midday, log_for};
    use chrono::Duration;

    fn project(id: &str, budget: Option<f64>, end_in_days: Option<i64>) -> Project {
        Project {
            id: id.into(),
            client_id: None,
            name: format!("project {id}"),
            budget,
            start_date: None,
            end_date: end_in_days.map(|d| Local::now().date_naive() + Duration::days(d)),
            status: Some("ACTIVE".into()),
            members: vec![],
        }
    }

    fn task(project_id: &str, status: Option<&str>) -> Task {
        Task {
            id: String::new(),
            project_id: Some(project_id.into()),
            assignee_id: None,
            priority: None,
            status: status.map(Into::into),
            estimated_hours: None,
        }
    }

    #[test]
    fn progress_rounds_half_up_to_two_decimals() {
        let tasks = vec![task("p", Some("DONE")), task("p", None), task("p", None)];
        let (completed, progress) = completion(&tasks);
        assert_eq!(completed, 1);
        assert_eq!(progress, 33.33);
    }

    #[test]
    fn empty_and_fully_done_projects() {
        assert_eq!(completion(&[]).1, 0.0);
        let all_done = vec![task("p", Some("done")), task("p", Some("COMPLETED"))];
        assert_eq!(completion(&all_done).1, 100.0);
    }

    #[test]
    fn risk_is_non_increasing_in_progress() {
        assert_eq!(risk_level(80.0, Some(30)), RiskLevel::Low);
        assert_eq!(risk_level(60.0, Some(30)), RiskLevel::Medium);
        assert_eq!(risk_level(40.0, Some(3)), RiskLevel::High);
    }

    #[test]
    fn unknown_runway_counts_as_short_for_risk() {
        assert_eq!(risk_level(40.0, None), RiskLevel::High);
        assert_eq!(risk_level(40.0, Some(30)), RiskLevel::Medium);
        assert_eq!(risk_level(90.0, None), RiskLevel::Low);
    }

    #[actix_web::test]
    async fn four_tasks_one_done_three_days_left_is_high_risk() {
        let db = Database::new();
        db.projects
            .create(project("p-1", None, Some(3)), Some("p-1".into()))
            .await
            .unwrap();
        for status in [Some("DONE"), Some("OPEN"), Some("OPEN"), None] {
            db.tasks.create(task("p-1", status), None).await.unwrap();
        }

        let report = progress_report(&db, "p-1").await.unwrap();
        assert_eq!(report.total_tasks, 4);
        assert_eq!(report.completed_tasks, 1);
        assert_eq!(report.progress, 25.0);
        assert_eq!(report.days_remaining, Some(3));
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[actix_web::test]
    async fn days_remaining_clamps_past_due_projects_to_zero() {
        let db = Database::new();
        db.projects
            .create(project("p-1", None, Some(-10)), Some("p-1".into()))
            .await
            .unwrap();

        let report = progress_report(&db, "p-1").await.unwrap();
        assert_eq!(report.days_remaining, Some(0));
    }

    #[actix_web::test]
    async fn missing_end_date_leaves_days_unknown() {
        let db = Database::new();
        db.projects
            .create(project("p-1", None, None), Some("p-1".into()))
            .await
            .unwrap();

        let report = progress_report(&db, "p-1").await.unwrap();
        assert_eq!(report.days_remaining, None);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[actix_web::test]
    async fn unknown_project_is_not_found() {
        let db = Database::new();
        let err = progress_report(&db, "nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn budget_burn_uses_the_monthly_divisor_and_buckets_breakdowns() {
        let db = Database::new();
        db.projects
            .create(project("p-1", Some(1_000_000.0), Some(30)), Some("p-1".into()))
            .await
            .unwrap();
        db.tasks.create(task("p-1", Some("DONE")), None).await.unwrap();
        db.tasks.create(task("p-1", Some("DONE")), None).await.unwrap();
        db.tasks.create(task("p-1", None), None).await.unwrap();

        // 10h regular at 160,000/160 = 1,000/h, plus 2h OT at 5,000/h
        let log = log_for(
            "u-1",
            "p-1",
            local_midday(2024, 3, 4),
            10.0,
            2.0,
            160_000.0,
            Some(5_000.0),
        );
        db.worklogs.create(log, None).await.unwrap();
        // zero snapshot contributes only its OT component
        let mut orphan = log_for("x", "p-1", local_midday(2024, 3, 5), 6.0, 1.0, 0.0, Some(2_000.0));
        orphan.user_id = None;
        db.worklogs.create(orphan, None).await.unwrap();

        let report = project_report(&db, "p-1").await.unwrap();
        assert_eq!(report.budget_used, 10_000.0 + 10_000.0 + 2_000.0);
        assert_eq!(report.budget_remaining, 1_000_000.0 - 22_000.0);
        assert_eq!(report.tasks_by_status.get("DONE"), Some(&2));
        assert_eq!(report.tasks_by_status.get("UNKNOWN"), Some(&1));
        assert_eq!(report.hours_by_user.get("u-1"), Some(&12.0));
        assert_eq!(report.hours_by_user.get("unknown"), Some(&7.0));
    }
}
