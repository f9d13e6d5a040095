use crate::handlers::employee_handler::{
    create_employee, get_current_employee, get_employee, list_employees, update_role,
    update_salary,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_employee_routes() -> actix_web::Scope {
    web::scope("/employees").service(
        web::scope("")
            .wrap(AuthMiddleware)
            .route("", web::post().to(create_employee))
            .route("", web::get().to(list_employees))
            .route("/me", web::get().to(get_current_employee))
            .route("/{user_id}", web::get().to(get_employee))
            .route("/{user_id}/update", web::patch().to(update_salary))
            .route("/{user_id}/role", web::patch().to(update_role)),
    )
}
