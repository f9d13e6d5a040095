use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub role: EmployeeRole,
    pub annual_leave_days: i32,
    pub base_salary: Decimal,
    pub bonus_payment: Decimal,
    pub year_end_bonus: Decimal,
    pub transportation_allowance: Decimal,
    pub commission: Decimal,
    pub mpf_deduction: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Role of an employee. Stored as the upper-case code (at most 20 chars);
/// anything outside this set is rejected when parsed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "MANAGER")]
    Manager,
    #[sea_orm(string_value = "SALESMAN")]
    Salesman,
    #[sea_orm(string_value = "CLERK")]
    Clerk,
    #[default]
    #[sea_orm(string_value = "DELIVERYMAN")]
    Deliveryman,
    #[sea_orm(string_value = "DIRECTOR")]
    Director,
    #[sea_orm(string_value = "CEO")]
    Ceo,
}

impl EmployeeRole {
    /// Human readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRole::Admin => "Administrator",
            EmployeeRole::Manager => "Manager",
            EmployeeRole::Salesman => "Salesman",
            EmployeeRole::Clerk => "Clerk",
            EmployeeRole::Deliveryman => "Deliveryman",
            EmployeeRole::Director => "Director",
            EmployeeRole::Ceo => "CEO",
        }
    }

    /// Roles allowed to manage other employees (create accounts, edit
    /// salaries, approve vacations).
    pub fn is_management(&self) -> bool {
        matches!(
            self,
            EmployeeRole::Admin | EmployeeRole::Manager | EmployeeRole::Director | EmployeeRole::Ceo
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::EmployeeRole;
    use sea_orm::{ActiveEnum, Iterable};

    #[test]
    fn role_codes_round_trip() {
        for role in EmployeeRole::iter() {
            let code = role.to_value();
            let parsed = EmployeeRole::try_from_value(&code).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(EmployeeRole::try_from_value(&"INTERN".to_string()).is_err());
        assert!(EmployeeRole::try_from_value(&"admin".to_string()).is_err());
        assert!(EmployeeRole::try_from_value(&"".to_string()).is_err());
    }

    #[test]
    fn unknown_code_is_rejected_by_serde() {
        assert!(serde_json::from_str::<EmployeeRole>("\"INTERN\"").is_err());
        let parsed: EmployeeRole = serde_json::from_str("\"SALESMAN\"").unwrap();
        assert_eq!(parsed, EmployeeRole::Salesman);
    }

    #[test]
    fn default_role_is_deliveryman() {
        assert_eq!(EmployeeRole::default(), EmployeeRole::Deliveryman);
        assert_eq!(EmployeeRole::default().to_value(), "DELIVERYMAN");
    }

    #[test]
    fn labels_match_codes() {
        assert_eq!(EmployeeRole::Admin.label(), "Administrator");
        assert_eq!(EmployeeRole::Manager.label(), "Manager");
        assert_eq!(EmployeeRole::Salesman.label(), "Salesman");
        assert_eq!(EmployeeRole::Clerk.label(), "Clerk");
        assert_eq!(EmployeeRole::Deliveryman.label(), "Deliveryman");
        assert_eq!(EmployeeRole::Director.label(), "Director");
        assert_eq!(EmployeeRole::Ceo.label(), "CEO");
    }

    #[test]
    fn all_codes_fit_column_width() {
        for role in EmployeeRole::iter() {
            assert!(role.to_value().len() <= 20, "{:?} exceeds 20 chars", role);
        }
    }

    #[test]
    fn management_roles() {
        assert!(EmployeeRole::Admin.is_management());
        assert!(EmployeeRole::Manager.is_management());
        assert!(EmployeeRole::Director.is_management());
        assert!(EmployeeRole::Ceo.is_management());
        assert!(!EmployeeRole::Salesman.is_management());
        assert!(!EmployeeRole::Clerk.is_management());
        assert!(!EmployeeRole::Deliveryman.is_management());
    }
}
