use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkReports::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkReports::Id))
                    .col(integer(WorkReports::UserId).not_null())
                    .col(date(WorkReports::ReportDate).not_null())
                    .col(text(WorkReports::Content))
                    .col(timestamp(WorkReports::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(WorkReports::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_reports_user_id")
                            .from(WorkReports::Table, WorkReports::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_reports_user_date")
                    .table(WorkReports::Table)
                    .col(WorkReports::UserId)
                    .col(WorkReports::ReportDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkReports {
    Table,
    Id,
    UserId,
    ReportDate,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
