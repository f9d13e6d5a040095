use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// New default once the role set was widened to include delivery staff.
pub const ROLE_DEFAULT: &str = "DELIVERYMAN";

/// Default the column carried before this alteration.
const PREVIOUS_ROLE_DEFAULT: &str = "CLERK";

const ROLE_MAX_LEN: u32 = 20;

// Redefinition applied by `up`. The allowed code set itself lives with
// `entity::EmployeeRole`, which validates every value crossing the API
// boundary; the column only carries the width bound and the insert default.
fn redefine_role_column(default: &str) -> TableAlterStatement {
    Table::alter()
        .table(EmployeeProfiles::Table)
        .modify_column(
            ColumnDef::new(EmployeeProfiles::Role)
                .string_len(ROLE_MAX_LEN)
                .not_null()
                .default(default),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Existing rows keep whatever value they hold; only the column
        // definition and the insert-time default change.
        manager.alter_table(redefine_role_column(ROLE_DEFAULT)).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(redefine_role_column(PREVIOUS_ROLE_DEFAULT))
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeProfiles {
    Table,
    Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefinition_is_idempotent() {
        let first = redefine_role_column(ROLE_DEFAULT).to_string(PostgresQueryBuilder);
        let second = redefine_role_column(ROLE_DEFAULT).to_string(PostgresQueryBuilder);
        assert_eq!(first, second);
    }

    #[test]
    fn redefinition_sets_new_default() {
        let sql = redefine_role_column(ROLE_DEFAULT).to_string(PostgresQueryBuilder);
        assert!(sql.contains("\"employee_profiles\""));
        assert!(sql.contains("'DELIVERYMAN'"));
    }

    #[test]
    fn width_bound_is_part_of_the_definition() {
        // The 20-char bound must come from the DDL itself, not from the
        // codes happening to be short.
        let sql = redefine_role_column(ROLE_DEFAULT).to_string(PostgresQueryBuilder);
        assert!(sql.contains("varchar(20)"));
    }

    #[test]
    fn rollback_restores_previous_default() {
        let sql = redefine_role_column(PREVIOUS_ROLE_DEFAULT).to_string(PostgresQueryBuilder);
        assert!(sql.contains("'CLERK'"));
        assert!(!sql.contains("'DELIVERYMAN'"));
    }
}
