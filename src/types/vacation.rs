use chrono::NaiveDate;
use entity::{vacation_items, vacation_requests};
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "half")]
    Half,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Full => "full",
            DayType::Half => "half",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Annual Leave")]
    Annual,
    #[serde(rename = "Sick Leave")]
    Sick,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HalfDayPeriod {
    AM,
    PM,
}

impl HalfDayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HalfDayPeriod::AM => "AM",
            HalfDayPeriod::PM => "PM",
        }
    }
}

/// One date item of a vacation request, shaped like the form payload: a
/// full-day range carries from/to, a half day carries a single date plus an
/// AM/PM period.
#[derive(Clone, Debug, Deserialize)]
pub struct VacationItemRequest {
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub single_date: Option<NaiveDate>,
    #[serde(default)]
    pub half_day_period: Option<HalfDayPeriod>,
}

#[derive(Deserialize)]
pub struct CreateVacationRequest {
    pub items: Vec<VacationItemRequest>,
}

#[derive(Deserialize)]
pub struct DecideVacationRequest {
    pub approve: bool,
}

#[derive(Serialize)]
pub struct VacationItemResponse {
    pub id: i32,
    pub leave_type: String,
    pub day_type: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub single_date: Option<NaiveDate>,
    pub half_day_period: Option<String>,
}

impl From<vacation_items::Model> for VacationItemResponse {
    fn from(item: vacation_items::Model) -> Self {
        Self {
            id: item.id,
            leave_type: item.leave_type,
            day_type: item.day_type,
            from_date: item.from_date,
            to_date: item.to_date,
            single_date: item.single_date,
            half_day_period: item.half_day_period,
        }
    }
}

#[derive(Serialize)]
pub struct VacationRequestResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: String,
    pub total_days: Decimal,
    pub decided_by: Option<i32>,
    pub decided_at: Option<chrono::NaiveDateTime>,
    pub created_at: chrono::NaiveDateTime,
    pub items: Vec<VacationItemResponse>,
}

impl VacationRequestResponse {
    pub fn from_model(
        request: vacation_requests::Model,
        items: Vec<vacation_items::Model>,
    ) -> Self {
        Self {
            id: request.id,
            user_id: request.user_id,
            status: request.status,
            total_days: request.total_days,
            decided_by: request.decided_by,
            decided_at: request.decided_at,
            created_at: request.created_at,
            items: items.into_iter().map(VacationItemResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_payload_matches_form_shape() {
        let item: VacationItemRequest = serde_json::from_str(
            r#"{"type":"full","leave_type":"Annual Leave","from_date":"2025-06-02","to_date":"2025-06-04"}"#,
        )
        .unwrap();
        assert_eq!(item.day_type, DayType::Full);
        assert_eq!(item.leave_type, LeaveType::Annual);
        assert!(item.single_date.is_none());
    }

    #[test]
    fn unknown_leave_type_is_rejected() {
        let result = serde_json::from_str::<VacationItemRequest>(
            r#"{"type":"half","leave_type":"Gardening Leave","single_date":"2025-06-02","half_day_period":"AM"}"#,
        );
        assert!(result.is_err());
    }
}
