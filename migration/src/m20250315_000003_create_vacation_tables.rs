use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VacationRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(VacationRequests::Id))
                    .col(integer(VacationRequests::UserId).not_null())
                    .col(string_len(VacationRequests::Status, 20).default("pending"))
                    .col(decimal_len(VacationRequests::TotalDays, 5, 1).default(0.0))
                    .col(integer_null(VacationRequests::DecidedBy))
                    .col(timestamp_null(VacationRequests::DecidedAt))
                    .col(timestamp(VacationRequests::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_requests_user_id")
                            .from(VacationRequests::Table, VacationRequests::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VacationItems::Table)
                    .if_not_exists()
                    .col(pk_auto(VacationItems::Id))
                    .col(integer(VacationItems::RequestId).not_null())
                    .col(string_len(VacationItems::LeaveType, 20))
                    .col(string_len(VacationItems::DayType, 10))
                    .col(date_null(VacationItems::FromDate))
                    .col(date_null(VacationItems::ToDate))
                    .col(date_null(VacationItems::SingleDate))
                    .col(string_len_null(VacationItems::HalfDayPeriod, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_items_request_id")
                            .from(VacationItems::Table, VacationItems::RequestId)
                            .to(VacationRequests::Table, VacationRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vacation_requests_user_id")
                    .table(VacationRequests::Table)
                    .col(VacationRequests::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacationItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VacationRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VacationRequests {
    Table,
    Id,
    UserId,
    Status,
    TotalDays,
    DecidedBy,
    DecidedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VacationItems {
    Table,
    Id,
    RequestId,
    LeaveType,
    DayType,
    FromDate,
    ToDate,
    SingleDate,
    HalfDayPeriod,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
