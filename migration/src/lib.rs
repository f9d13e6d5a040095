pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_employee_profiles_table;
mod m20250315_000003_create_vacation_tables;
mod m20250330_000004_create_work_reports_table;
mod m20250516_000005_add_profile_bonus_payment;
mod m20250516_000006_alter_employee_profile_role;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_employee_profiles_table::Migration),
            Box::new(m20250315_000003_create_vacation_tables::Migration),
            Box::new(m20250330_000004_create_work_reports_table::Migration),
            Box::new(m20250516_000005_add_profile_bonus_payment::Migration),
            Box::new(m20250516_000006_alter_employee_profile_role::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_alteration_follows_its_predecessor() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let predecessor = names
            .iter()
            .position(|n| n == "m20250516_000005_add_profile_bonus_payment")
            .expect("bonus_payment migration missing");
        let alteration = names
            .iter()
            .position(|n| n == "m20250516_000006_alter_employee_profile_role")
            .expect("role alteration missing");
        assert!(predecessor < alteration);
    }

    #[test]
    fn migration_names_are_unique() {
        let mut names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
