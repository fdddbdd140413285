use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

use crate::api::client::ClientPayload;
use crate::api::expense::ExpensePayload;
use crate::api::invoice::InvoicePayload;
use crate::api::payroll::CalculatePayroll;
use crate::api::project::ProjectPayload;
use crate::api::task::TaskPayload;
use crate::api::user::UserPayload;
use crate::api::work_log::CreateWorkLog;
use crate::model::client::Client;
use crate::model::expense::Expense;
use crate::model::invoice::Invoice;
use crate::model::payroll::Payroll;
use crate::model::project::Project;
use crate::model::report::{MonthlyReport, ProgressReport, ProjectReport, RiskLevel};
use crate::model::role::Role;
use crate::model::task::Task;
use crate::model::user::User;
use crate::model::work_log::WorkLog;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ERP Backend API",
        version = "1.0.0",
        description = r#"
## Internal ERP Backend

CRUD over the document store plus the payroll and reporting computations.

### Key Features
- **Users, Projects, Tasks, Clients** — plain CRUD per collection
- **Work Logs** — hour tracking with frozen salary snapshots
- **Payroll** — per-user monthly pay calculation from the snapshots
- **Reports** — project progress/risk and organization-wide monthly totals

### Security
Callers identify themselves with the `x-user-id` header; the gate resolves
the header to a user record and checks the record's role against a static
per-route permission table.
"#,
    ),
    paths(
        crate::api::user::create_user,
        crate::api::user::list_users,
        crate::api::user::find_user_by_email,
        crate::api::user::get_user,
        crate::api::user::update_user,
        crate::api::user::delete_user,

        crate::api::project::create_project,
        crate::api::project::list_projects,
        crate::api::project::get_project,
        crate::api::project::update_project,
        crate::api::project::delete_project,

        crate::api::task::create_task,
        crate::api::task::list_tasks,
        crate::api::task::get_task,
        crate::api::task::update_task,
        crate::api::task::delete_task,

        crate::api::work_log::create,
        crate::api::work_log::list,
        crate::api::work_log::get,
        crate::api::work_log::delete,

        crate::api::payroll::calculate,
        crate::api::payroll::list,
        crate::api::payroll::get,

        crate::api::report::project_progress,
        crate::api::report::project_full,
        crate::api::report::monthly_summary,

        crate::api::client::create,
        crate::api::client::list,
        crate::api::client::get,
        crate::api::client::update,
        crate::api::client::delete,

        crate::api::invoice::create,
        crate::api::invoice::list,
        crate::api::invoice::get,
        crate::api::invoice::update,
        crate::api::invoice::delete,

        crate::api::expense::create,
        crate::api::expense::list,
        crate::api::expense::get,
        crate::api::expense::update,
        crate::api::expense::delete,
    ),
    components(
        schemas(
            Role,
            RiskLevel,
            User,
            UserPayload,
            Project,
            ProjectPayload,
            Task,
            TaskPayload,
            WorkLog,
            CreateWorkLog,
            Payroll,
            CalculatePayroll,
            ProgressReport,
            ProjectReport,
            MonthlyReport,
            Client,
            ClientPayload,
            Invoice,
            InvoicePayload,
            Expense,
            ExpensePayload
        )
    ),
    modifiers(&CallerIdSecurity),
    tags(
        (name = "Users", description = "User management APIs"),
        (name = "Projects", description = "Project management APIs"),
        (name = "Tasks", description = "Task management APIs"),
        (name = "WorkLogs", description = "Hour tracking APIs"),
        (name = "Payroll", description = "Payroll calculation APIs"),
        (name = "Reports", description = "Progress, risk and monthly reporting APIs"),
        (name = "Clients", description = "Client registry APIs"),
        (name = "Billing", description = "Invoice and expense APIs"),
    )
)]
pub struct ApiDoc;

pub struct CallerIdSecurity;

impl Modify for CallerIdSecurity {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "caller_id",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-user-id"))),
        );
    }
}
