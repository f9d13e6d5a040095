use entity::vacation_items;
use sea_orm::prelude::Decimal;

use crate::types::vacation::{DayType, LeaveType, VacationItemRequest};

const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1); // 0.5

/// Number of vacation days one submitted item covers. Full-day ranges count
/// calendar days inclusive of both ends; half days count 0.5 regardless of
/// period.
pub fn item_days(item: &VacationItemRequest) -> Result<Decimal, String> {
    match item.day_type {
        DayType::Full => {
            let from = item
                .from_date
                .ok_or_else(|| "from_date is required for full day items".to_string())?;
            let to = item
                .to_date
                .ok_or_else(|| "to_date is required for full day items".to_string())?;
            if to < from {
                return Err("to_date must not be before from_date".to_string());
            }
            Ok(Decimal::from((to - from).num_days() + 1))
        }
        DayType::Half => {
            if item.single_date.is_none() {
                return Err("single_date is required for half day items".to_string());
            }
            if item.half_day_period.is_none() {
                return Err("half_day_period is required for half day items".to_string());
            }
            Ok(HALF_DAY)
        }
    }
}

/// Total days across all items of a request.
pub fn total_days(items: &[VacationItemRequest]) -> Result<Decimal, String> {
    if items.is_empty() {
        return Err("at least one date item is required".to_string());
    }
    let mut total = Decimal::ZERO;
    for item in items {
        total += item_days(item)?;
    }
    Ok(total)
}

/// Days that draw down the annual leave balance. Sick leave is tracked but
/// not deducted.
pub fn annual_leave_days(items: &[VacationItemRequest]) -> Result<Decimal, String> {
    let mut total = Decimal::ZERO;
    for item in items {
        if item.leave_type == LeaveType::Annual {
            total += item_days(item)?;
        }
    }
    Ok(total)
}

/// Same computation for an item already persisted. Rows written by
/// `submit_vacation_request` always satisfy the shape checks above, so
/// malformed rows count as zero rather than failing a balance read.
pub fn stored_item_days(item: &vacation_items::Model) -> Decimal {
    match item.day_type.as_str() {
        "full" => match (item.from_date, item.to_date) {
            (Some(from), Some(to)) if to >= from => Decimal::from((to - from).num_days() + 1),
            _ => Decimal::ZERO,
        },
        "half" => HALF_DAY,
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::vacation::HalfDayPeriod;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn full(from: NaiveDate, to: NaiveDate) -> VacationItemRequest {
        VacationItemRequest {
            day_type: DayType::Full,
            leave_type: LeaveType::Annual,
            from_date: Some(from),
            to_date: Some(to),
            single_date: None,
            half_day_period: None,
        }
    }

    fn half(on: NaiveDate) -> VacationItemRequest {
        VacationItemRequest {
            day_type: DayType::Half,
            leave_type: LeaveType::Annual,
            from_date: None,
            to_date: None,
            single_date: Some(on),
            half_day_period: Some(HalfDayPeriod::PM),
        }
    }

    #[test]
    fn full_day_range_is_inclusive() {
        let item = full(date(2025, 6, 2), date(2025, 6, 4));
        assert_eq!(item_days(&item).unwrap(), Decimal::from(3));
    }

    #[test]
    fn single_day_range_counts_one() {
        let item = full(date(2025, 6, 2), date(2025, 6, 2));
        assert_eq!(item_days(&item).unwrap(), Decimal::from(1));
    }

    #[test]
    fn half_day_counts_half() {
        let item = half(date(2025, 6, 2));
        assert_eq!(item_days(&item).unwrap(), HALF_DAY);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let item = full(date(2025, 6, 4), date(2025, 6, 2));
        assert!(item_days(&item).is_err());
    }

    #[test]
    fn half_day_without_period_is_rejected() {
        let mut item = half(date(2025, 6, 2));
        item.half_day_period = None;
        assert!(item_days(&item).is_err());
    }

    #[test]
    fn totals_sum_across_items() {
        let items = vec![
            full(date(2025, 6, 2), date(2025, 6, 4)),
            half(date(2025, 6, 6)),
        ];
        assert_eq!(total_days(&items).unwrap(), Decimal::new(35, 1));
    }

    #[test]
    fn empty_request_is_rejected() {
        assert!(total_days(&[]).is_err());
    }

    #[test]
    fn sick_leave_does_not_consume_the_balance() {
        let mut sick = full(date(2025, 6, 2), date(2025, 6, 3));
        sick.leave_type = LeaveType::Sick;
        let items = vec![sick, half(date(2025, 6, 6))];
        assert_eq!(annual_leave_days(&items).unwrap(), HALF_DAY);
        assert_eq!(total_days(&items).unwrap(), Decimal::new(25, 1));
    }

    #[test]
    fn stored_items_recompute_the_same_days() {
        let stored = entity::vacation_items::Model {
            id: 1,
            request_id: 1,
            leave_type: "Annual Leave".to_string(),
            day_type: "full".to_string(),
            from_date: Some(date(2025, 6, 2)),
            to_date: Some(date(2025, 6, 4)),
            single_date: None,
            half_day_period: None,
        };
        assert_eq!(stored_item_days(&stored), Decimal::from(3));
    }
}
