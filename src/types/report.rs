use chrono::NaiveDate;
use entity::work_reports;
use serde::{Deserialize, Serialize};

use crate::utils::pagination::PaginationQuery;

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub report_date: NaiveDate,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateReportRequest {
    pub content: String,
}

#[derive(Default, Deserialize)]
pub struct ListReportsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub id: i32,
    pub report_date: NaiveDate,
    pub content: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<work_reports::Model> for ReportResponse {
    fn from(report: work_reports::Model) -> Self {
        Self {
            id: report.id,
            report_date: report.report_date,
            content: report.content,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}
