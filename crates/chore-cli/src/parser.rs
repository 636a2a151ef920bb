use anyhow::{anyhow, Result};
use chore_core::models::{FrequencyRecord, RecurrenceRule};
use chrono::{DateTime, NaiveDate, Weekday};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;

use crate::cli::RuleArgs;

/// Parses a due date as a calendar day. ISO dates are taken as-is; anything
/// else ("tomorrow", "next friday") is read relative to `now`.
pub fn parse_due_date(date_str: &str, now: DateTime<Tz>) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    parse_date_string(date_str, now, Dialect::Us)
        .map(|parsed| parsed.date_naive())
        .map_err(|e| anyhow!("Failed to parse due date '{}': {}", date_str, e))
}

/// Accepts weekday names ("mon", "Monday") or a Sunday-based index ("0".."6").
pub fn parse_weekday(value: &str) -> Result<i64> {
    if let Ok(index) = value.trim().parse::<i64>() {
        return Ok(index);
    }
    value
        .trim()
        .parse::<Weekday>()
        .map(|day| i64::from(day.num_days_from_sunday()))
        .map_err(|_| anyhow!("Unknown weekday '{}'", value))
}

/// Builds a rule from command-line flags, rejecting flags that do not apply
/// to the chosen frequency. Returns `None` when no `--every` was given.
pub fn build_rule(args: &RuleArgs) -> Result<Option<RecurrenceRule>> {
    let Some(every) = args.every else {
        return Ok(None);
    };

    let record = FrequencyRecord {
        kind: every.as_str().to_string(),
        value: args.interval.map(i64::from),
        unit: args.unit.map(|unit| unit.to_string()),
        day_of_week: args.on.as_deref().map(parse_weekday).transpose()?,
        day_of_month: args.day.map(i64::from),
    };
    record.validate()?;
    Ok(Some(record.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Every;
    use chore_core::models::CustomUnit;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Tz> {
        // Wednesday
        Tz::UTC.with_ymd_and_hms(2025, 6, 11, 10, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2025-07-04", date(2025, 7, 4))]
    #[case("today", date(2025, 6, 11))]
    #[case("tomorrow", date(2025, 6, 12))]
    fn test_parse_due_date(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_due_date(input, now()).unwrap(), expected);
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert!(parse_due_date("whenever", now()).is_err());
    }

    #[rstest]
    #[case("sun", 0)]
    #[case("Monday", 1)]
    #[case("sat", 6)]
    #[case("3", 3)]
    fn test_parse_weekday(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_weekday(input).unwrap(), expected);
    }

    fn args(every: Every) -> RuleArgs {
        RuleArgs { every: Some(every), ..Default::default() }
    }

    #[test]
    fn test_build_rule() {
        assert_eq!(build_rule(&RuleArgs::default()).unwrap(), None);
        assert_eq!(build_rule(&args(Every::Daily)).unwrap(), Some(RecurrenceRule::Daily));

        let weekly = RuleArgs { on: Some("fri".into()), ..args(Every::Weekly) };
        assert_eq!(build_rule(&weekly).unwrap(), Some(RecurrenceRule::weekly_on(Weekday::Fri)));

        let monthly = RuleArgs { day: Some(31), ..args(Every::Monthly) };
        assert_eq!(build_rule(&monthly).unwrap(), Some(RecurrenceRule::monthly_on(31).unwrap()));

        let custom = RuleArgs { interval: Some(6), unit: Some(CustomUnit::Weeks), ..args(Every::Custom) };
        assert_eq!(build_rule(&custom).unwrap(), Some(RecurrenceRule::custom(6, CustomUnit::Weeks)));

        let custom_default_unit = RuleArgs { interval: Some(10), ..args(Every::Custom) };
        assert_eq!(build_rule(&custom_default_unit).unwrap(), Some(RecurrenceRule::custom(10, CustomUnit::Days)));
    }

    #[rstest]
    #[case(RuleArgs { on: Some("mon".into()), ..args(Every::Monthly) })]
    #[case(RuleArgs { day: Some(32), ..args(Every::Monthly) })]
    #[case(RuleArgs { day: Some(5), ..args(Every::Weekly) })]
    #[case(RuleArgs { on: Some("7".into()), ..args(Every::Weekly) })]
    #[case(RuleArgs { unit: Some(CustomUnit::Weeks), ..args(Every::Yearly) })]
    #[case(RuleArgs { on: Some("someday".into()), ..args(Every::Weekly) })]
    #[case(RuleArgs { interval: Some(2), on: Some("mon".into()), ..args(Every::Weekly) })]
    #[case(RuleArgs { interval: Some(3), day: Some(15), ..args(Every::Monthly) })]
    #[case(RuleArgs { interval: Some(3), ..args(Every::Daily) })]
    fn test_build_rule_rejects_mismatched_flags(#[case] input: RuleArgs) {
        assert!(build_rule(&input).is_err());
    }
}
