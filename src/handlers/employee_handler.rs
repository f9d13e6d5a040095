use actix_web::{web, Error, HttpResponse, Result};
use bcrypt::{hash, DEFAULT_COST};
use entity::{employee_profiles, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use sea_orm::prelude::Decimal;
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;
use crate::types::employee::{
    CreateEmployeeRequest, EmployeeResponse, ListEmployeesQuery, UpdateRoleRequest,
    UpdateSalaryRequest,
};
use crate::utils::auth::check_management_role;
use crate::utils::pagination::{PaginatedResponse, PaginationInfo};

const DEFAULT_ANNUAL_LEAVE_DAYS: i32 = 14;

pub async fn create_employee(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    req: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    // Check if username is taken
    let existing_username = users::Entity::find()
        .filter(users::Column::Username.eq(&req.username))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    if existing_username.is_some() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Username is already taken".to_string(),
            "employee": serde_json::Value::Null,
        })));
    }

    // Check if email is taken
    let existing_email = users::Entity::find()
        .filter(users::Column::Email.eq(&req.email))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    if existing_email.is_some() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "An employee with this email already exists".to_string(),
            "employee": serde_json::Value::Null,
        })));
    }

    // Hash password
    let password_hash = hash(&req.password, DEFAULT_COST).map_err(|e| {
        log::error!("Password hashing error: {}", e);
        actix_web::error::ErrorInternalServerError("Error processing password")
    })?;

    // Account and profile are created together or not at all
    let txn = db.get_ref().begin().await.map_err(|e| {
        log::error!("Transaction error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error occurred")
    })?;

    let new_user = users::ActiveModel {
        username: Set(req.username.clone()),
        email: Set(req.email.clone()),
        password_hash: Set(password_hash),
        first_name: Set(req.first_name.clone()),
        last_name: Set(req.last_name.clone()),
        is_active: Set(true),
        ..Default::default()
    };

    let user = new_user.insert(&txn).await.map_err(|e| {
        log::error!("User creation error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create employee account")
    })?;

    let new_profile = employee_profiles::ActiveModel {
        user_id: Set(user.id),
        role: Set(req.role),
        annual_leave_days: Set(req.annual_leave_days.unwrap_or(DEFAULT_ANNUAL_LEAVE_DAYS)),
        base_salary: Set(req.base_salary.unwrap_or(Decimal::ZERO)),
        ..Default::default()
    };

    let profile = new_profile.insert(&txn).await.map_err(|e| {
        log::error!("Profile creation error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create employee profile")
    })?;

    txn.commit().await.map_err(|e| {
        log::error!("Transaction commit error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create employee")
    })?;

    let employee = EmployeeResponse::from((user, profile));

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee created successfully".to_string(),
        "employee": employee,
    })))
}

pub async fn list_employees(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    query: web::Query<ListEmployeesQuery>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    let mut finder = employee_profiles::Entity::find()
        .find_also_related(users::Entity)
        .order_by_asc(employee_profiles::Column::UserId);

    if let Some(role) = query.role {
        finder = finder.filter(employee_profiles::Column::Role.eq(role));
    }
    if let Some(is_active) = query.is_active {
        finder = finder.filter(users::Column::IsActive.eq(is_active));
    }

    let page = query.pagination.get_page();
    let limit = query.pagination.get_limit();

    let paginator = finder.paginate(db.get_ref(), limit);
    let total_items = paginator.num_items().await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error occurred")
    })?;

    let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error occurred")
    })?;

    let employees: Vec<EmployeeResponse> = rows
        .into_iter()
        .filter_map(|(profile, user)| user.map(|u| EmployeeResponse::from((u, profile))))
        .collect();

    let response = PaginatedResponse::new(
        employees,
        PaginationInfo::new(page, total_items, limit),
    );

    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_current_employee(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, Error> {
    find_employee_response(db.get_ref(), auth_user.id).await
}

pub async fn get_employee(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }
    find_employee_response(db.get_ref(), *user_id).await
}

async fn find_employee_response(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<HttpResponse, Error> {
    let row = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(user_id))
        .find_also_related(users::Entity)
        .one(db)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?;

    match row {
        Some((profile, Some(user))) => {
            let employee = EmployeeResponse::from((user, profile));
            Ok(HttpResponse::Ok().json(json!({
                "message": "Employee details retrieved successfully".to_string(),
                "employee": employee,
            })))
        }
        _ => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found".to_string(),
            "employee": serde_json::Value::Null,
        }))),
    }
}

pub async fn update_salary(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    user_id: web::Path<i32>,
    req: web::Json<UpdateSalaryRequest>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(*user_id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee not found"))?;

    let mut active: employee_profiles::ActiveModel = profile.into();
    if let Some(base_salary) = req.base_salary {
        active.base_salary = Set(base_salary);
    }
    if let Some(bonus_payment) = req.bonus_payment {
        active.bonus_payment = Set(bonus_payment);
    }
    if let Some(year_end_bonus) = req.year_end_bonus {
        active.year_end_bonus = Set(year_end_bonus);
    }
    if let Some(transportation_allowance) = req.transportation_allowance {
        active.transportation_allowance = Set(transportation_allowance);
    }
    if let Some(commission) = req.commission {
        active.commission = Set(commission);
    }
    if let Some(mpf_deduction) = req.mpf_deduction {
        active.mpf_deduction = Set(mpf_deduction);
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let profile = active.update(db.get_ref()).await.map_err(|e| {
        log::error!("Salary update error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to update salary")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Salary updated successfully".to_string(),
        "profile": profile,
    })))
}

pub async fn update_role(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    user_id: web::Path<i32>,
    req: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, Error> {
    if let Err(response) = check_management_role(&auth_user) {
        return Ok(response);
    }

    let profile = employee_profiles::Entity::find()
        .filter(employee_profiles::Column::UserId.eq(*user_id))
        .one(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee not found"))?;

    let mut active: employee_profiles::ActiveModel = profile.into();
    active.role = Set(req.role);
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let profile = active.update(db.get_ref()).await.map_err(|e| {
        log::error!("Role update error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to update role")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Role updated successfully".to_string(),
        "role": profile.role,
        "role_label": profile.role.label(),
    })))
}
