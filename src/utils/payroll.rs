use entity::{employee_profiles, EmployeeRole};
use sea_orm::prelude::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct PayrollBreakdown {
    pub base_salary: Decimal,
    pub bonus_payment: Decimal,
    pub year_end_bonus: Decimal,
    pub transportation_allowance: Decimal,
    pub commission: Decimal,
    pub gross_payment: Decimal,
    pub mpf_deduction: Decimal,
    pub net_payment: Decimal,
}

/// Monthly payroll for a profile. Commission applies to sales staff only,
/// and the year-end bonus is paid with the December run.
pub fn compute_payroll(profile: &employee_profiles::Model, month: u32) -> PayrollBreakdown {
    let commission = if profile.role == EmployeeRole::Salesman {
        profile.commission
    } else {
        Decimal::ZERO
    };
    let year_end_bonus = if month == 12 {
        profile.year_end_bonus
    } else {
        Decimal::ZERO
    };

    let gross_payment = profile.base_salary
        + profile.bonus_payment
        + profile.transportation_allowance
        + commission
        + year_end_bonus;
    let net_payment = gross_payment - profile.mpf_deduction;

    PayrollBreakdown {
        base_salary: profile.base_salary,
        bonus_payment: profile.bonus_payment,
        year_end_bonus,
        transportation_allowance: profile.transportation_allowance,
        commission,
        gross_payment,
        mpf_deduction: profile.mpf_deduction,
        net_payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile(role: EmployeeRole) -> employee_profiles::Model {
        let created = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        employee_profiles::Model {
            id: 1,
            user_id: 1,
            role,
            annual_leave_days: 14,
            base_salary: Decimal::from(20_000),
            bonus_payment: Decimal::from(1_000),
            year_end_bonus: Decimal::from(20_000),
            transportation_allowance: Decimal::from(500),
            commission: Decimal::from(3_000),
            mpf_deduction: Decimal::from(1_500),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn clerk_gets_no_commission() {
        let breakdown = compute_payroll(&profile(EmployeeRole::Clerk), 6);
        assert_eq!(breakdown.commission, Decimal::ZERO);
        assert_eq!(breakdown.gross_payment, Decimal::from(21_500));
        assert_eq!(breakdown.net_payment, Decimal::from(20_000));
    }

    #[test]
    fn salesman_commission_counts() {
        let breakdown = compute_payroll(&profile(EmployeeRole::Salesman), 6);
        assert_eq!(breakdown.commission, Decimal::from(3_000));
        assert_eq!(breakdown.gross_payment, Decimal::from(24_500));
    }

    #[test]
    fn year_end_bonus_only_in_december() {
        let june = compute_payroll(&profile(EmployeeRole::Clerk), 6);
        assert_eq!(june.year_end_bonus, Decimal::ZERO);

        let december = compute_payroll(&profile(EmployeeRole::Clerk), 12);
        assert_eq!(december.year_end_bonus, Decimal::from(20_000));
        assert_eq!(december.gross_payment, Decimal::from(41_500));
    }
}
