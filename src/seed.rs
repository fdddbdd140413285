use anyhow::Result;
use chrono::{Duration, Local, Utc};
use tracing::info;

use crate::db::Database;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::user::User;
use crate::service::work_log::{NewWorkLog, create_work_log};

fn demo_user(id: &str, name: &str, role: &str, salary_type: &str, base: f64, ot: Option<f64>) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: format!("{id}@demo.local"),
        phone: None,
        role: Some(role.into()),
        salary_type: Some(salary_type.into()),
        base_salary: base,
        overtime_hourly_rate: ot,
        created_at: Some(Utc::now()),
    }
}

/// Populate an empty store with a small demo org so the API is usable out
/// of the box. Skipped when any user already exists.
pub async fn seed_demo_data(db: &Database) -> Result<()> {
    if !db.users.get_all().await?.is_empty() {
        info!("store not empty, skipping demo seed");
        return Ok(());
    }

    let users = [
        demo_user("admin-1", "Ada Admin", "ADMIN", "monthly", 12_000_000.0, None),
        demo_user("fin-1", "Farid Finance", "FINANCE", "monthly", 9_000_000.0, None),
        demo_user("mgr-1", "Mina Manager", "MANAGER", "monthly", 10_000_000.0, None),
        demo_user("emp-1", "Rahim Uddin", "EMPLOYEE", "monthly", 8_000_000.0, Some(75_000.0)),
        demo_user("emp-2", "Sara Contractor", "EMPLOYEE", "hourly", 1_200.0, None),
    ];
    for user in users {
        let id = user.id.clone();
        db.users.create(user, Some(id)).await?;
    }

    let project = Project {
        id: "p-demo".into(),
        client_id: None,
        name: "Warehouse revamp".into(),
        budget: Some(120_000_000.0),
        start_date: Some(Local::now().date_naive() - Duration::days(30)),
        end_date: Some(Local::now().date_naive() + Duration::days(60)),
        status: Some("ACTIVE".into()),
        members: vec!["emp-1".into(), "emp-2".into()],
    };
    db.projects.create(project, Some("p-demo".into())).await?;

    for (status, assignee) in [("DONE", "emp-1"), ("IN_PROGRESS", "emp-1"), ("OPEN", "emp-2")] {
        let task = Task {
            id: String::new(),
            project_id: Some("p-demo".into()),
            assignee_id: Some(assignee.into()),
            priority: Some("MEDIUM".into()),
            status: Some(status.into()),
            estimated_hours: Some(24.0),
        };
        db.tasks.create(task, None).await?;
    }

    for (user_id, regular, overtime) in [("emp-1", 8.0, 2.0), ("emp-2", 6.0, 0.0)] {
        create_work_log(
            db,
            NewWorkLog {
                task_id: None,
                user_id: Some(user_id.into()),
                project_id: Some("p-demo".into()),
                regular_hours: regular,
                overtime_hours: overtime,
                work_date: Utc::now(),
            },
        )
        .await?;
    }

    info!("demo data seeded");
    Ok(())
}
