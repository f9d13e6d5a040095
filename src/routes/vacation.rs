use crate::handlers::vacation_handler::{
    decide_vacation_request, get_vacation_balance, list_my_vacation_requests,
    list_pending_requests, submit_vacation_request,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_vacation_routes() -> actix_web::Scope {
    web::scope("/vacations").service(
        web::scope("")
            .wrap(AuthMiddleware)
            .route("", web::post().to(submit_vacation_request))
            .route("", web::get().to(list_my_vacation_requests))
            .route("/balance", web::get().to(get_vacation_balance))
            .route("/pending", web::get().to(list_pending_requests))
            .route("/{request_id}/decide", web::post().to(decide_vacation_request)),
    )
}
