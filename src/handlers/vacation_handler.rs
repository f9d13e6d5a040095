use actix_web::{web, Error, HttpResponse, Result};
use entity::{employee_profiles, vacation_items, vacation_requests};
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;
use crate::types::vacation::{
    CreateVacationRequest, DecideVacationRequest, VacationRequestResponse,
};
use crate::utils::auth::check_management_role;
use crate::utils::vacation::{annual_leave_days, stored_item_days, total_days};

const STATUS_PENDING: &str = "pending";
const STATUS_APPROVED: &str = "approved";
const STATUS_REJECTED: &str = "rejected";

// Annual-leave days already claimed by this user's pending and approved
// requests. Rejected requests release their days.
async fn consumed_annual_days(db: &DatabaseConnection, user_id: i32) -> Result<Decimal, DbErr> {
    let rows = vacation_items::Entity::find()
        .find_also_related(vacation_requests::Entity)
        .filter(vacation_requests::Column::UserId.eq(user_id))
        .filter(vacation_requests::Column::Status.ne(STATUS_REJECTED))
        .filter(vacation_items::Column::LeaveType.eq("Annual Leave"))
        .all(db)
        .await?;

    Ok(rows.iter().map(|(item, _)| stored_item_days(item)).sum())
}

pub async fn submit_vacation_request(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    req: web::Json<CreateVacationRequest>,
) -> Result<HttpResponse, Error> {
    let total = total_days(&req.items).map_err(actix_web::error::ErrorBadRequest)?;
    let annual = annual_leave_days(&req.items).map_err(actix_web::error::ErrorBadRequest)?;

    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(auth_user.id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee profile not found"))?;

    let consumed = consumed_annual_days(db.get_ref(), auth_user.id)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    let remaining = Decimal::from(profile.annual_leave_days) - consumed;
    if annual > remaining {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Not enough vacation days left".to_string(),
            "requested": annual,
            "remaining": remaining,
        })));
    }

    // Request and its date items are stored together or not at all
    let txn = db.get_ref().begin().await.map_err(|e| {
        log::error!("Transaction error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error occurred")
    })?;

    let request = vacation_requests::ActiveModel {
        user_id: Set(auth_user.id),
        status: Set(STATUS_PENDING.to_string()),
        total_days: Set(total),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| {
        log::error!("Vacation request creation error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create vacation request")
    })?;

    let mut stored_items = Vec::with_capacity(req.items.len());
    for item in &req.items {
        let stored = vacation_items::ActiveModel {
            request_id: Set(request.id),
            leave_type: Set(item.leave_type.as_str().to_string()),
            day_type: Set(item.day_type.as_str().to_string()),
            from_date: Set(item.from_date),
            to_date: Set(item.to_date),
            single_date: Set(item.single_date),
            half_day_period: Set(item.half_day_period.map(|p| p.as_str().to_string())),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            log::error!("Vacation item creation error: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to create vacation request")
        })?;
        stored_items.push(stored);
    }

    txn.commit().await.map_err(|e| {
        log::error!("Transaction commit error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create vacation request")
    })?;

    let response = VacationRequestResponse::from_model(request, stored_items);

    Ok(HttpResponse::Created().json(json!({
        "message": "Vacation request submitted successfully".to_string(),
        "request": response,
    })))
}

pub async fn list_my_vacation_requests(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let rows = vacation_requests::Entity::find()
        .filter(vacation_requests::Column::UserId.eq(auth_user.id))
        .order_by_desc(vacation_requests::Column::CreatedAt)
        .find_with_related(vacation_items::Entity)
        .all(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    let requests: Vec<VacationRequestResponse> = rows
        .into_iter()
        .map(|(request, items)| VacationRequestResponse::from_model(request, items))
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Vacation requests retrieved successfully".to_string(),
        "requests": requests,
    })))
}

pub async fn get_vacation_balance(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(auth_user.id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee profile not found"))?;

    let consumed = consumed_annual_days(db.get_ref(), auth_user.id)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    let total = Decimal::from(profile.annual_leave_days);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Vacation balance retrieved successfully".to_string(),
        "annual_leave_days": total,
        "used": consumed,
        "remaining": total - consumed,
    })))
}

pub async fn list_pending_requests(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    let rows = vacation_requests::Entity::find()
        .filter(vacation_requests::Column::Status.eq(STATUS_PENDING))
        .order_by_asc(vacation_requests::Column::CreatedAt)
        .find_with_related(vacation_items::Entity)
        .all(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    let requests: Vec<VacationRequestResponse> = rows
        .into_iter()
        .map(|(request, items)| VacationRequestResponse::from_model(request, items))
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Pending vacation requests retrieved successfully".to_string(),
        "requests": requests,
    })))
}

pub async fn decide_vacation_request(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    request_id: web::Path<i32>,
    req: web::Json<DecideVacationRequest>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    let request = vacation_requests::Entity::find_by_id(*request_id)
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Vacation request not found"))?;

    if request.status != STATUS_PENDING {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Vacation request has already been decided".to_string(),
            "status": request.status,
        })));
    }

    let new_status = if req.approve {
        STATUS_APPROVED
    } else {
        STATUS_REJECTED
    };

    let mut active: vacation_requests::ActiveModel = request.into();
    active.status = Set(new_status.to_string());
    active.decided_by = Set(Some(auth_user.id));
    active.decided_at = Set(Some(chrono::Utc::now().naive_utc()));

    let request = active.update(db.get_ref()).await.map_err(|e| {
        log::error!("Vacation decision error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to update vacation request")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Vacation request updated successfully".to_string(),
        "id": request.id,
        "status": request.status,
    })))
}
