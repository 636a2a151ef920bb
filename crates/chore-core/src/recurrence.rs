//! Next-due-date resolution.
//!
//! Every function here is pure: the same rule and reference date always give
//! the same answer, and nothing is read from the clock. Arithmetic is
//! calendar-based on [`NaiveDate`], so due dates never carry a time of day.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday};

use crate::models::{CustomUnit, Monthly, RecurrenceRule, Weekly};

/// Computes the date a task is next due after `reference`.
///
/// # Behavior
/// - `Daily` and unrecognized kinds: the day after `reference`
/// - `Weekly` pinned: the next matching weekday, never `reference` itself
/// - `Weekly`/`Monthly`/`Yearly`/`Custom` unpinned: `reference` plus the interval
/// - `Monthly` pinned: the pinned day of the following month, clamped to that
///   month's last day when the month is shorter than the pin
///
/// The result is always strictly after `reference`, except when the date
/// would overflow chrono's range, where it saturates at [`NaiveDate::MAX`].
pub fn resolve_next_due(rule: &RecurrenceRule, reference: NaiveDate) -> NaiveDate {
    match rule {
        RecurrenceRule::Daily | RecurrenceRule::Unrecognized { .. } => {
            advance(reference, CustomUnit::Days, 1)
        }
        RecurrenceRule::Weekly(Weekly::On(day)) => next_weekday(reference, *day),
        RecurrenceRule::Weekly(Weekly::Every { interval }) => {
            advance(reference, CustomUnit::Weeks, *interval)
        }
        RecurrenceRule::Monthly(Monthly::OnDay(day)) => next_day_of_month(reference, *day),
        RecurrenceRule::Monthly(Monthly::Every { interval }) => {
            advance(reference, CustomUnit::Months, *interval)
        }
        RecurrenceRule::Yearly { interval } => advance(reference, CustomUnit::Years, *interval),
        RecurrenceRule::Custom { interval, unit } => advance(reference, *unit, *interval),
    }
}

/// Resolves against a timestamp by first truncating it to its local calendar
/// day, so a completion at 23:30 and one at 00:10 on the same day agree.
pub fn resolve_next_due_at<Tz: TimeZone>(rule: &RecurrenceRule, at: &DateTime<Tz>) -> NaiveDate {
    resolve_next_due(rule, at.date_naive())
}

/// Lists the next `count` due dates assuming each one is completed on time.
pub fn preview_due_dates(rule: &RecurrenceRule, reference: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut current = reference;
    for _ in 0..count {
        let next = resolve_next_due(rule, current);
        if next <= current {
            break;
        }
        dates.push(next);
        current = next;
    }
    dates
}

/// Adds `interval` units to `date`. An interval of zero is treated as one.
pub fn advance(date: NaiveDate, unit: CustomUnit, interval: u32) -> NaiveDate {
    let n = interval.max(1);
    let next = match unit {
        CustomUnit::Days => date.checked_add_days(Days::new(u64::from(n))),
        CustomUnit::Weeks => date.checked_add_days(Days::new(u64::from(n) * 7)),
        CustomUnit::Months => date.checked_add_months(Months::new(n)),
        CustomUnit::Years => date.checked_add_months(Months::new(n.saturating_mul(12))),
    };
    next.unwrap_or(NaiveDate::MAX)
}

fn next_weekday(reference: NaiveDate, target: Weekday) -> NaiveDate {
    let from = reference.weekday().num_days_from_sunday();
    let to = target.num_days_from_sunday();
    let offset = match (to + 7 - from) % 7 {
        0 => 7,
        n => n,
    };
    advance(reference, CustomUnit::Days, offset)
}

fn next_day_of_month(reference: NaiveDate, day: u32) -> NaiveDate {
    if !(1..=31).contains(&day) {
        return advance(reference, CustomUnit::Months, 1);
    }

    let candidate = month_start(reference, 1).map(|start| pin_day(start, day));
    match candidate {
        Some(date) if date > reference => date,
        _ => month_start(reference, 2)
            .map(|start| pin_day(start, day))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// First day of the month `months` after the month containing `date`.
fn month_start(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(months))
}

/// `day` within the month starting at `start`, clamped to the month's length.
fn pin_day(start: NaiveDate, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(start));
    start.with_day(day).unwrap_or(start)
}

fn days_in_month(start: NaiveDate) -> u32 {
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod fixed_cases {
        use super::*;

        #[rstest]
        #[case::daily(RecurrenceRule::Daily, date(2025, 3, 14), date(2025, 3, 15))]
        #[case::daily_year_end(RecurrenceRule::Daily, date(2025, 12, 31), date(2026, 1, 1))]
        #[case::weekly(RecurrenceRule::weekly(1), date(2025, 3, 14), date(2025, 3, 21))]
        #[case::biweekly(RecurrenceRule::weekly(2), date(2025, 3, 14), date(2025, 3, 28))]
        #[case::monthly(RecurrenceRule::monthly(1), date(2025, 3, 14), date(2025, 4, 14))]
        #[case::quarterly(RecurrenceRule::monthly(3), date(2025, 11, 20), date(2026, 2, 20))]
        #[case::monthly_clamps(RecurrenceRule::monthly(1), date(2025, 1, 31), date(2025, 2, 28))]
        #[case::yearly(RecurrenceRule::yearly(1), date(2025, 6, 1), date(2026, 6, 1))]
        #[case::yearly_leap_day(RecurrenceRule::yearly(1), date(2024, 2, 29), date(2025, 2, 28))]
        #[case::every_five_years(RecurrenceRule::yearly(5), date(2024, 2, 29), date(2029, 2, 28))]
        #[case::custom_days(RecurrenceRule::custom(10, CustomUnit::Days), date(2025, 2, 25), date(2025, 3, 7))]
        #[case::custom_months(RecurrenceRule::custom(2, CustomUnit::Months), date(2025, 12, 5), date(2026, 2, 5))]
        #[case::custom_years(RecurrenceRule::custom(2, CustomUnit::Years), date(2025, 7, 4), date(2027, 7, 4))]
        #[case::unrecognized(RecurrenceRule::Unrecognized { kind: "lunar".into() }, date(2025, 3, 14), date(2025, 3, 15))]
        fn test_resolve(#[case] rule: RecurrenceRule, #[case] reference: NaiveDate, #[case] expected: NaiveDate) {
            assert_eq!(resolve_next_due(&rule, reference), expected);
        }

        #[test]
        fn test_custom_six_weeks_is_exactly_42_days() {
            let reference = date(2025, 4, 10);
            let next = resolve_next_due(&RecurrenceRule::custom(6, CustomUnit::Weeks), reference);
            assert_eq!((next - reference).num_days(), 42);
        }

        #[test]
        fn test_zero_interval_behaves_like_one() {
            let reference = date(2025, 4, 10);
            let zero = RecurrenceRule::Monthly(Monthly::Every { interval: 0 });
            assert_eq!(resolve_next_due(&zero, reference), date(2025, 5, 10));
        }
    }

    mod weekly_pinned {
        use super::*;

        #[test]
        fn test_same_weekday_advances_a_full_week() {
            // 2025-03-10 is a Monday
            let monday = date(2025, 3, 10);
            let rule = RecurrenceRule::weekly_on(Weekday::Mon);
            assert_eq!(resolve_next_due(&rule, monday), date(2025, 3, 17));
        }

        #[rstest]
        #[case(Weekday::Tue, date(2025, 3, 11))]
        #[case(Weekday::Sat, date(2025, 3, 15))]
        #[case(Weekday::Sun, date(2025, 3, 16))]
        fn test_later_weekday_in_same_week(#[case] target: Weekday, #[case] expected: NaiveDate) {
            let monday = date(2025, 3, 10);
            assert_eq!(resolve_next_due(&RecurrenceRule::weekly_on(target), monday), expected);
        }

        #[test]
        fn test_earlier_weekday_wraps_to_next_week() {
            // Friday -> Monday
            let friday = date(2025, 3, 14);
            let rule = RecurrenceRule::weekly_on(Weekday::Mon);
            assert_eq!(resolve_next_due(&rule, friday), date(2025, 3, 17));
        }
    }

    mod monthly_pinned {
        use super::*;

        #[test]
        fn test_pin_lands_in_following_month() {
            let rule = RecurrenceRule::monthly_on(15).unwrap();
            assert_eq!(resolve_next_due(&rule, date(2025, 3, 10)), date(2025, 4, 15));
            assert_eq!(resolve_next_due(&rule, date(2025, 3, 20)), date(2025, 4, 15));
            assert_eq!(resolve_next_due(&rule, date(2025, 12, 15)), date(2026, 1, 15));
        }

        #[test]
        fn test_day_31_clamps_to_end_of_february() {
            let rule = RecurrenceRule::monthly_on(31).unwrap();
            assert_eq!(resolve_next_due(&rule, date(2025, 1, 15)), date(2025, 2, 28));
            assert_eq!(resolve_next_due(&rule, date(2024, 1, 15)), date(2024, 2, 29));
        }

        #[test]
        fn test_clamped_date_does_not_drift_the_pin() {
            let rule = RecurrenceRule::monthly_on(31).unwrap();
            let feb = resolve_next_due(&rule, date(2025, 1, 31));
            assert_eq!(feb, date(2025, 2, 28));
            assert_eq!(resolve_next_due(&rule, feb), date(2025, 3, 31));
            assert_eq!(resolve_next_due(&rule, date(2025, 3, 31)), date(2025, 4, 30));
        }

        #[rstest]
        #[case(0)]
        #[case(32)]
        #[case(400)]
        fn test_out_of_range_pin_falls_back_to_one_month(#[case] day: u32) {
            let rule = RecurrenceRule::Monthly(Monthly::OnDay(day));
            assert_eq!(resolve_next_due(&rule, date(2025, 1, 15)), date(2025, 2, 15));
        }
    }

    #[test]
    fn test_resolve_at_truncates_to_local_day() {
        let rule = RecurrenceRule::Daily;
        let late_evening = Utc.with_ymd_and_hms(2025, 3, 14, 23, 30, 0).unwrap();
        assert_eq!(resolve_next_due_at(&rule, &late_evening), date(2025, 3, 15));

        // Same instant seen from UTC+2 is already the 15th locally
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            resolve_next_due_at(&rule, &late_evening.with_timezone(&plus_two)),
            date(2025, 3, 16)
        );
    }

    #[test]
    fn test_preview_chains_resolutions() {
        let rule = RecurrenceRule::weekly_on(Weekday::Sun);
        let dates = preview_due_dates(&rule, date(2025, 3, 12), 3);
        assert_eq!(dates, vec![date(2025, 3, 16), date(2025, 3, 23), date(2025, 3, 30)]);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(resolve_next_due(&RecurrenceRule::yearly(u32::MAX), date(2025, 1, 1)), NaiveDate::MAX);
        assert!(preview_due_dates(&RecurrenceRule::Daily, NaiveDate::MAX, 3).is_empty());
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..150_000).prop_map(|offset| date(1900, 1, 1) + chrono::Duration::days(offset))
    }

    fn arb_rule() -> impl Strategy<Value = RecurrenceRule> {
        let weekday = (0i64..7).prop_map(|i| crate::models::weekday_from_index(i).unwrap());
        let unit = prop_oneof![
            Just(CustomUnit::Days),
            Just(CustomUnit::Weeks),
            Just(CustomUnit::Months),
            Just(CustomUnit::Years),
        ];
        prop_oneof![
            Just(RecurrenceRule::Daily),
            weekday.prop_map(RecurrenceRule::weekly_on),
            (0u32..60).prop_map(|interval| RecurrenceRule::Weekly(Weekly::Every { interval })),
            (0u32..40).prop_map(|day| RecurrenceRule::Monthly(Monthly::OnDay(day))),
            (0u32..60).prop_map(|interval| RecurrenceRule::Monthly(Monthly::Every { interval })),
            (0u32..20).prop_map(|interval| RecurrenceRule::Yearly { interval }),
            (0u32..100, unit).prop_map(|(interval, unit)| RecurrenceRule::Custom { interval, unit }),
            "[a-z]{1,8}".prop_map(|kind| RecurrenceRule::Unrecognized { kind }),
        ]
    }

    proptest! {
        #[test]
        fn prop_resolution_is_deterministic(rule in arb_rule(), reference in arb_date()) {
            prop_assert_eq!(resolve_next_due(&rule, reference), resolve_next_due(&rule, reference));
        }

        #[test]
        fn prop_next_due_is_strictly_later(rule in arb_rule(), reference in arb_date()) {
            prop_assert!(resolve_next_due(&rule, reference) > reference);
        }

        #[test]
        fn prop_pinned_weekday_is_within_a_week(index in 0i64..7, reference in arb_date()) {
            let day = crate::models::weekday_from_index(index).unwrap();
            let next = resolve_next_due(&RecurrenceRule::weekly_on(day), reference);
            let gap = (next - reference).num_days();
            prop_assert!((1..=7).contains(&gap));
            prop_assert_eq!(next.weekday(), day);
        }

        #[test]
        fn prop_pinned_day_of_month_matches_or_clamps(day in 1u32..=31, reference in arb_date()) {
            let next = resolve_next_due(&RecurrenceRule::monthly_on(day).unwrap(), reference);
            let last_day = days_in_month(next.with_day(1).unwrap());
            prop_assert_eq!(next.day(), day.min(last_day));
        }
    }
}
