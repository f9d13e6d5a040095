use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeProfiles::Id))
                    .col(integer(EmployeeProfiles::UserId).not_null().unique_key())
                    .col(string_len(EmployeeProfiles::Role, 20).default("CLERK"))
                    .col(integer(EmployeeProfiles::AnnualLeaveDays).default(14))
                    .col(decimal_len(EmployeeProfiles::BaseSalary, 10, 2).default(0.00))
                    .col(decimal_len(EmployeeProfiles::YearEndBonus, 10, 2).default(0.00))
                    .col(decimal_len(EmployeeProfiles::TransportationAllowance, 10, 2).default(0.00))
                    .col(decimal_len(EmployeeProfiles::Commission, 10, 2).default(0.00))
                    .col(decimal_len(EmployeeProfiles::MpfDeduction, 10, 2).default(0.00))
                    .col(timestamp(EmployeeProfiles::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(EmployeeProfiles::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_profiles_user_id")
                            .from(EmployeeProfiles::Table, EmployeeProfiles::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeProfiles {
    Table,
    Id,
    UserId,
    Role,
    AnnualLeaveDays,
    BaseSalary,
    YearEndBonus,
    TransportationAllowance,
    Commission,
    MpfDeduction,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
