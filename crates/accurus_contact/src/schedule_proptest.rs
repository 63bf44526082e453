#[cfg(test)]
mod tests {
    use crate::schedule::date_bounds;
    use chrono::{Datelike, NaiveDate};
    use proptest::prelude::*;

    // Days from CE covering roughly 1900..2200
    fn reference_date() -> impl Strategy<Value = NaiveDate> {
        (693_596i32..803_533i32)
            .prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
    }

    proptest! {
        #[test]
        fn prop_min_is_reference_date(today in reference_date()) {
            let bounds = date_bounds(today);
            prop_assert_eq!(bounds.min, today);
            prop_assert!(bounds.max >= bounds.min);
        }

        #[test]
        fn prop_max_is_three_calendar_months_ahead(today in reference_date()) {
            let bounds = date_bounds(today);

            let month_index = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
            prop_assert_eq!(month_index(bounds.max) - month_index(today), 3);

            // Same day of month unless the target month is too short
            prop_assert!(bounds.max.day() <= today.day());
            if bounds.max.day() < today.day() {
                let next = bounds.max.succ_opt().unwrap();
                prop_assert_eq!(next.day(), 1, "clamped day must be the month's last");
            }

            let span = (bounds.max - bounds.min).num_days();
            prop_assert!((88..=92).contains(&span), "span was {} days", span);
        }
    }
}
