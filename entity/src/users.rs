use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::employee_profiles::Entity")]
    EmployeeProfiles,
    #[sea_orm(has_many = "super::vacation_requests::Entity")]
    VacationRequests,
    #[sea_orm(has_many = "super::work_reports::Entity")]
    WorkReports,
}

impl Related<super::employee_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeProfiles.def()
    }
}

impl Related<super::vacation_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationRequests.def()
    }
}

impl Related<super::work_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
