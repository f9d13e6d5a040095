use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;

/// Check if the authenticated user holds a management role
pub fn check_management_role(
    auth_user: &web::ReqData<AuthenticatedUser>,
) -> Result<(), HttpResponse> {
    if !auth_user.role.is_management() {
        return Err(HttpResponse::Forbidden().json(json!({
            "message": "Only management roles can perform this action",
            "status": "error"
        })));
    }
    Ok(())
}
