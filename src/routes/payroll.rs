use crate::handlers::payroll_handler::get_payroll;
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_payroll_routes() -> actix_web::Scope {
    web::scope("/payroll").route("", web::get().to(get_payroll).wrap(AuthMiddleware))
}
