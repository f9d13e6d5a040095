use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vacation_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub leave_type: String,
    pub day_type: String,
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    pub single_date: Option<Date>,
    pub half_day_period: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vacation_requests::Entity",
        from = "Column::RequestId",
        to = "super::vacation_requests::Column::Id"
    )]
    VacationRequests,
}

impl Related<super::vacation_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
