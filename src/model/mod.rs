pub mod client;
pub mod expense;
pub mod invoice;
pub mod payroll;
pub mod project;
pub mod report;
pub mod role;
pub mod task;
pub mod user;
pub mod work_log;
