use crate::handlers::report_handler::{create_report, delete_report, list_reports, update_report};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_report_routes() -> actix_web::Scope {
    web::scope("/reports").service(
        web::scope("")
            .wrap(AuthMiddleware)
            .route("", web::post().to(create_report))
            .route("", web::get().to(list_reports))
            .route("/{report_id}", web::put().to(update_report))
            .route("/{report_id}", web::delete().to(delete_report)),
    )
}
