use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Add bonus_payment column to employee_profiles table
        manager
            .alter_table(
                Table::alter()
                    .table(EmployeeProfiles::Table)
                    .add_column(
                        ColumnDef::new(EmployeeProfiles::BonusPayment)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0.00),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop bonus_payment column from employee_profiles table
        manager
            .alter_table(
                Table::alter()
                    .table(EmployeeProfiles::Table)
                    .drop_column(EmployeeProfiles::BonusPayment)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeProfiles {
    Table,
    BonusPayment,
}
