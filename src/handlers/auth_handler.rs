use actix_web::{web, Error, HttpResponse, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use entity::{employee_profiles, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;
use crate::types::auth::{ChangePasswordRequest, LoginRequest};
use crate::utils::jwt::create_jwt_token;

pub async fn login(
    db: web::Data<DatabaseConnection>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    // Find user by username
    let user = users::Entity::find()
        .filter(users::Column::Username.eq(&req.username))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    let user = match user {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(json!({
                "message": "Invalid username or password".to_string(),
                "token": serde_json::Value::Null,
                "user": serde_json::Value::Null,
            })))
        }
    };

    // Check if user is active
    if !user.is_active {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "message": "Account is deactivated".to_string(),
            "token": serde_json::Value::Null,
            "user": serde_json::Value::Null,
        })));
    }

    // Verify password
    let is_valid = verify(&req.password, &user.password_hash).map_err(|e| {
        log::error!("Password verification error: {}", e);
        actix_web::error::ErrorInternalServerError("Error verifying password")
    })?;

    if !is_valid {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "message": "Invalid username or password".to_string(),
            "token": serde_json::Value::Null,
            "user": serde_json::Value::Null,
        })));
    }

    // Every account carries a profile; the role in the token comes from it
    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(user.id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| {
            log::error!("User {} has no employee profile", user.id);
            actix_web::error::ErrorInternalServerError("Employee profile missing")
        })?;

    // Create JWT token
    let token = create_jwt_token(&user.id.to_string(), profile.role).map_err(|e| {
        log::error!("JWT token creation error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create authentication token")
    })?;

    let user_response = json!({
        "id": user.id,
        "username": user.username,
        "firstname": user.first_name,
        "lastname": user.last_name,
        "email": user.email,
        "role": profile.role,
        "role_label": profile.role.label(),
        "annual_leave_days": profile.annual_leave_days,
    });

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful".to_string(),
        "token": Some(token),
        "user": Some(user_response),
    })))
}

pub async fn change_password(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    req: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, Error> {
    let user = users::Entity::find_by_id(auth_user.id)
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("User not found"))?;

    // Verify current password before accepting a new one
    let is_valid = verify(&req.current_password, &user.password_hash).map_err(|e| {
        log::error!("Password verification error: {}", e);
        actix_web::error::ErrorInternalServerError("Error verifying password")
    })?;

    if !is_valid {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "message": "Current password is incorrect".to_string(),
            "status": "error",
        })));
    }

    let password_hash = hash(&req.new_password, DEFAULT_COST).map_err(|e| {
        log::error!("Password hashing error: {}", e);
        actix_web::error::ErrorInternalServerError("Error processing password")
    })?;

    let mut active: users::ActiveModel = user.into();
    active.password_hash = Set(password_hash);
    active.updated_at = Set(chrono::Utc::now().naive_utc());
    active.update(db.get_ref()).await.map_err(|e| {
        log::error!("Password update error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to update password")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Password changed successfully".to_string(),
        "status": "success",
    })))
}
