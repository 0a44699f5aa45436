//! Calorie engine for single training entries.
//!
//! This module implements:
//! - Parsing of `"<steps>,<activity>,<duration>"` records
//! - Height-based distance and mean speed
//! - Calorie expenditure for running and walking

use crate::duration::{self, parse_duration};
use crate::{ActivityKind, ActivityRecord, CalorieResult, Error, Result, TrainingReport};
use chrono::TimeDelta;

/// Meters in one kilometer
const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour
const MIN_IN_H: f64 = 60.0;
/// Step length as a share of height
const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns half of what running does for the same kinematics
const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Parse a training entry
///
/// Checks run in a fixed order and the first failure wins: field count,
/// steps, duration, then the activity label.
pub fn parse_training(data: &str) -> Result<ActivityRecord> {
    let components: Vec<&str> = data.split(',').collect();
    let [steps, activity, duration] = components[..] else {
        return Err(Error::IncorrectArgCount);
    };

    let steps: i64 = steps.parse()?;
    if steps <= 0 {
        return Err(Error::InvalidStepsNumber);
    }

    let duration = parse_duration(duration)?;
    if duration <= TimeDelta::zero() {
        return Err(Error::InvalidDuration);
    }

    let kind = ActivityKind::from_label(activity).ok_or(Error::UnknownActivity)?;

    Ok(ActivityRecord {
        steps,
        kind,
        duration,
    })
}

/// Distance in kilometers for a step count at the given height (meters)
pub fn distance(steps: i64, height: f64) -> f64 {
    if steps <= 0 {
        return 0.0;
    }
    height * STEP_LENGTH_COEFFICIENT * steps as f64 / M_IN_KM
}

/// Mean speed in km/h
pub fn mean_speed(steps: i64, height: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps, height) / duration::hours(duration)
}

/// Calories burned while running
pub fn running_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64> {
    spent_calories(steps, weight, height, duration)
}

/// Calories burned while walking
pub fn walking_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64> {
    let calories = spent_calories(steps, weight, height, duration)?;
    Ok(calories * WALKING_CALORIES_COEFFICIENT)
}

/// Calories for the given activity kind
pub fn activity_spent_calories(
    kind: ActivityKind,
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<f64> {
    match kind {
        ActivityKind::Running => running_spent_calories(steps, weight, height, duration),
        ActivityKind::Walking => walking_spent_calories(steps, weight, height, duration),
    }
}

fn spent_calories(steps: i64, weight: f64, height: f64, duration: TimeDelta) -> Result<f64> {
    if steps <= 0 {
        return Err(Error::InvalidStepsNumber);
    }
    if weight <= 0.0 {
        return Err(Error::InvalidWeight);
    }
    if height <= 0.0 {
        return Err(Error::InvalidHeight);
    }
    if duration <= TimeDelta::zero() {
        return Err(Error::InvalidDuration);
    }
    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * duration::minutes(duration) / MIN_IN_H)
}

/// Compute distance, speed and calories for an already parsed record
pub fn calculate(record: &ActivityRecord, weight: f64, height: f64) -> Result<CalorieResult> {
    let calories =
        activity_spent_calories(record.kind, record.steps, weight, height, record.duration)?;
    Ok(CalorieResult {
        distance_km: distance(record.steps, height),
        mean_speed_kmh: mean_speed(record.steps, height, record.duration),
        calories,
    })
}

/// Parse a training entry and summarise it, surfacing every failure
pub fn training_report(data: &str, weight: f64, height: f64) -> Result<TrainingReport> {
    let record = parse_training(data)?;
    let metrics = calculate(&record, weight, height)?;
    Ok(TrainingReport {
        activity: record.kind,
        duration_hours: duration::hours(record.duration),
        metrics,
    })
}

/// Parse a training entry and render its summary
///
/// Parse failures are returned. A failed calorie calculation (non-positive
/// weight or height) yields an empty summary and no error; existing
/// consumers rely on that. Use [`training_report`] to see the failure.
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String> {
    let record = parse_training(data)?;
    match calculate(&record, weight, height) {
        Ok(metrics) => {
            let report = TrainingReport {
                activity: record.kind,
                duration_hours: duration::hours(record.duration),
                metrics,
            };
            Ok(report.to_string())
        }
        Err(err) => {
            tracing::debug!("Calorie calculation failed for {:?}: {}", data, err);
            Ok(String::new())
        }
    }
}
