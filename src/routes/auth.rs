use crate::handlers::auth_handler::{change_password, login};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_auth_routes() -> actix_web::Scope {
    web::scope("/auth")
        .route("/login", web::post().to(login))
        .route(
            "/change-password",
            web::post().to(change_password).wrap(AuthMiddleware),
        )
}
