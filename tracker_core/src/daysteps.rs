//! Daily step reporter.
//!
//! Packages arrive as `"<steps>,<duration>"` and are always treated as
//! walking. Distance here uses a fixed step length, unlike the height-based
//! distance of the calorie engine.

use crate::calories::walking_spent_calories;
use crate::duration::parse_duration;
use crate::{DailyStepsRecord, DayReport, Error, Result};
use chrono::TimeDelta;

/// Length of one step in meters
const STEP_LENGTH: f64 = 0.65;
/// Meters in one kilometer
const M_IN_KM: f64 = 1000.0;

/// Parse a daily step package
///
/// The duration's sign is checked before its parse result. An unreadable
/// duration counts as zero, so it is reported as [`Error::InvalidDuration`].
pub fn parse_package(data: &str) -> Result<DailyStepsRecord> {
    if data.is_empty() {
        return Err(Error::IncorrectArgCount);
    }
    let components: Vec<&str> = data.split(',').collect();
    let [steps, duration] = components[..] else {
        return Err(Error::IncorrectArgCount);
    };

    let steps: i64 = steps.parse()?;
    if steps <= 0 {
        return Err(Error::InvalidStepsNumber);
    }

    let parsed = parse_duration(duration);
    let value = parsed.as_ref().copied().unwrap_or(TimeDelta::zero());
    if value <= TimeDelta::zero() {
        return Err(Error::InvalidDuration);
    }
    let duration = parsed?;

    Ok(DailyStepsRecord { steps, duration })
}

/// Summarise a daily step package, surfacing every failure
pub fn day_report(data: &str, weight: f64, height: f64) -> Result<DayReport> {
    let record = parse_package(data)?;
    let distance_km = record.steps as f64 * STEP_LENGTH / M_IN_KM;
    let calories = walking_spent_calories(record.steps, weight, height, record.duration)?;
    Ok(DayReport {
        steps: record.steps,
        distance_km,
        calories,
    })
}

/// Render the daily activity summary
///
/// Never fails: a rejected package is logged and rendered as an empty
/// string.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match day_report(data, weight, height) {
        Ok(report) => report.to_string(),
        Err(err) => {
            tracing::warn!("{}", err);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;

    #[test]
    fn test_parse_valid_package() {
        let record = parse_package("5000,45m").unwrap();
        assert_eq!(record.steps, 5000);
        assert_eq!(record.duration, TimeDelta::minutes(45));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert!(matches!(parse_package(""), Err(Error::IncorrectArgCount)));
        assert!(matches!(parse_package("5000"), Err(Error::IncorrectArgCount)));
        assert!(matches!(parse_package("5000,45m,x"), Err(Error::IncorrectArgCount)));
    }

    #[test]
    fn test_parse_bad_steps() {
        assert!(matches!(parse_package("abc,30m"), Err(Error::ParseInt(_))));
        assert!(matches!(parse_package("0,30m"), Err(Error::InvalidStepsNumber)));
        assert!(matches!(parse_package("-20,30m"), Err(Error::InvalidStepsNumber)));
    }

    #[test]
    fn test_unreadable_duration_reports_invalid_duration() {
        assert!(matches!(parse_package("100,abc"), Err(Error::InvalidDuration)));
        assert!(matches!(parse_package("100,30"), Err(Error::InvalidDuration)));
        assert!(matches!(parse_package("100,"), Err(Error::InvalidDuration)));
        assert!(matches!(parse_package("100,0s"), Err(Error::InvalidDuration)));
        assert!(matches!(parse_package("100,-1h"), Err(Error::InvalidDuration)));
    }

    #[test]
    fn test_day_report() {
        let report = day_report("5000,45m", 65.0, 1.70).unwrap();
        assert_eq!(report.steps, 5000);
        assert_eq!(report.distance_km, 3.25);
        assert!(report.calories > 0.0);
    }

    #[test]
    fn test_day_report_surfaces_calorie_errors() {
        assert!(matches!(day_report("5000,45m", 0.0, 1.70), Err(Error::InvalidWeight)));
        assert!(matches!(day_report("5000,45m", 65.0, 0.0), Err(Error::InvalidHeight)));
    }

    #[test]
    fn test_day_action_info() {
        logging::init_test();

        let info = day_action_info("5000,45m", 65.0, 1.70);
        assert_eq!(
            info,
            "Количество шагов: 5000.\nДистанция составила 3.25 км.\nВы сожгли 124.31 ккал.\n"
        );
        assert_eq!(info, day_action_info("5000,45m", 65.0, 1.70));
    }

    #[test]
    fn test_day_action_info_swallows_errors() {
        logging::init_test();

        assert_eq!(day_action_info("", 65.0, 1.70), "");
        assert_eq!(day_action_info("abc,30m", 65.0, 1.70), "");
        assert_eq!(day_action_info("100,abc", 65.0, 1.70), "");
        assert_eq!(day_action_info("5000,45m", -65.0, 1.70), "");
    }
}
