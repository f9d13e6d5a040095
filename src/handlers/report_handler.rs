use actix_web::{web, Error, HttpResponse, Result};
use entity::work_reports;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::json;

use crate::middleware::auth::AuthenticatedUser;
use crate::types::report::{
    CreateReportRequest, ListReportsQuery, ReportResponse, UpdateReportRequest,
};
use crate::utils::pagination::{PaginatedResponse, PaginationInfo};

pub async fn create_report(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    req: web::Json<CreateReportRequest>,
) -> Result<HttpResponse, Error> {
    if req.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Report content must not be empty".to_string(),
            "report": serde_json::Value::Null,
        })));
    }

    let report = work_reports::ActiveModel {
        user_id: Set(auth_user.id),
        report_date: Set(req.report_date),
        content: Set(req.content.clone()),
        ..Default::default()
    }
    .insert(db.get_ref())
    .await
    .map_err(|e| {
        log::error!("Report creation error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to create report")
    })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Report created successfully".to_string(),
        "report": ReportResponse::from(report),
    })))
}

pub async fn list_reports(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    query: web::Query<ListReportsQuery>,
) -> Result<HttpResponse, Error> {
    let mut finder = work_reports::Entity::find()
        .filter(work_reports::Column::UserId.eq(auth_user.id))
        .order_by_desc(work_reports::Column::ReportDate);

    if let Some(from) = query.from {
        finder = finder.filter(work_reports::Column::ReportDate.gte(from));
    }
    if let Some(to) = query.to {
        finder = finder.filter(work_reports::Column::ReportDate.lte(to));
    }

    let page = query.pagination.get_page();
    let limit = query.pagination.get_limit();

    let paginator = finder.paginate(db.get_ref(), limit);
    let total_items = paginator.num_items().await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error occurred")
    })?;

    let reports: Vec<ReportResponse> = paginator
        .fetch_page(page - 1)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .into_iter()
        .map(ReportResponse::from)
        .collect();

    let response =
        PaginatedResponse::new(reports, PaginationInfo::new(page, total_items, limit));

    Ok(HttpResponse::Ok().json(response))
}

pub async fn update_report(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    report_id: web::Path<i32>,
    req: web::Json<UpdateReportRequest>,
) -> Result<HttpResponse, Error> {
    let report = find_own_report(db.get_ref(), auth_user.id, *report_id).await?;

    let mut active: work_reports::ActiveModel = report.into();
    active.content = Set(req.content.clone());
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let report = active.update(db.get_ref()).await.map_err(|e| {
        log::error!("Report update error: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to update report")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Report updated successfully".to_string(),
        "report": ReportResponse::from(report),
    })))
}

pub async fn delete_report(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
    report_id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
    let report = find_own_report(db.get_ref(), auth_user.id, *report_id).await?;

    work_reports::Entity::delete_by_id(report.id)
        .exec(db.get_ref())
        .await
        .map_err(|e| {
            log::error!("Report deletion error: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to delete report")
        })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Report deleted successfully".to_string(),
        "status": "success",
    })))
}

// Reports are private to their author; someone else's id behaves like a miss.
async fn find_own_report(
    db: &DatabaseConnection,
    user_id: i32,
    report_id: i32,
) -> Result<work_reports::Model, Error> {
    work_reports::Entity::find_by_id(report_id)
        .filter(work_reports::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error occurred")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Report not found"))
}
