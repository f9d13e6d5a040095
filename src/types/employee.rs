use entity::{employee_profiles, users, EmployeeRole};
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::pagination::PaginationQuery;

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    // New hires without an explicit role start as delivery staff
    #[serde(default)]
    pub role: EmployeeRole,
    pub annual_leave_days: Option<i32>,
    pub base_salary: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct UpdateSalaryRequest {
    pub base_salary: Option<Decimal>,
    pub bonus_payment: Option<Decimal>,
    pub year_end_bonus: Option<Decimal>,
    pub transportation_allowance: Option<Decimal>,
    pub commission: Option<Decimal>,
    pub mpf_deduction: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: EmployeeRole,
}

#[derive(Default, Deserialize)]
pub struct ListEmployeesQuery {
    pub role: Option<EmployeeRole>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub role: EmployeeRole,
    pub role_label: &'static str,
    pub annual_leave_days: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<(users::Model, employee_profiles::Model)> for EmployeeResponse {
    fn from((user, profile): (users::Model, employee_profiles::Model)) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            role: profile.role,
            role_label: profile.role.label(),
            annual_leave_days: profile.annual_leave_days,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_role_defaults_to_deliveryman() {
        let request: CreateEmployeeRequest = serde_json::from_str(
            r#"{"username":"jchan","email":"jchan@example.com","password":"secret",
                "first_name":"Jacky","last_name":"Chan"}"#,
        )
        .unwrap();
        assert_eq!(request.role, EmployeeRole::Deliveryman);
    }

    #[test]
    fn out_of_set_role_is_rejected() {
        let result = serde_json::from_str::<CreateEmployeeRequest>(
            r#"{"username":"jchan","email":"jchan@example.com","password":"secret",
                "first_name":"Jacky","last_name":"Chan","role":"SUPERVISOR"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn role_update_parses_known_codes_only() {
        let ok: UpdateRoleRequest = serde_json::from_str(r#"{"role":"DIRECTOR"}"#).unwrap();
        assert_eq!(ok.role, EmployeeRole::Director);
        assert!(serde_json::from_str::<UpdateRoleRequest>(r#"{"role":"director"}"#).is_err());
    }
}
