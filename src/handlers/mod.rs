pub mod auth_handler;
pub mod employee_handler;
pub mod health;
pub mod payroll_handler;
pub mod report_handler;
pub mod vacation_handler;
