use actix_web::{web, Error, HttpResponse, Result};
use entity::employee_profiles;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;
use crate::utils::payroll::compute_payroll;

#[derive(Deserialize)]
pub struct PayrollQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn get_payroll(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    query: web::Query<PayrollQuery>,
) -> Result<HttpResponse, Error> {
    if !(1..=12).contains(&query.month) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "month must be between 1 and 12".to_string(),
            "payroll": serde_json::Value::Null,
        })));
    }

    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(auth_user.id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee profile not found"))?;

    let breakdown = compute_payroll(&profile, query.month);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Payroll retrieved successfully".to_string(),
        "year": query.year,
        "month": query.month,
        "role": profile.role,
        "payroll": breakdown,
    })))
}
