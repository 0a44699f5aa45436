//! Core domain types for the step tracker.
//!
//! This module defines the values that flow through one call:
//! - Parsed records (training entries and daily step packages)
//! - Derived metrics and the reports rendered from them

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Activity Types
// ============================================================================

/// Kind of training recorded by the device
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    #[serde(rename = "Бег")]
    Running,
    #[serde(rename = "Ходьба")]
    Walking,
}

impl ActivityKind {
    /// Label used in records and reports
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Бег",
            ActivityKind::Walking => "Ходьба",
        }
    }

    /// Match a record label exactly (no trimming, no case folding)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Бег" => Some(ActivityKind::Running),
            "Ходьба" => Some(ActivityKind::Walking),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Record Types
// ============================================================================

/// A training entry: `"<steps>,<activity>,<duration>"`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub kind: ActivityKind,
    pub duration: TimeDelta,
}

/// A daily step package: `"<steps>,<duration>"`, always walking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyStepsRecord {
    pub steps: i64,
    pub duration: TimeDelta,
}

// ============================================================================
// Derived Metrics
// ============================================================================

/// Metrics derived from one training entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieResult {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

/// Summary of one training entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingReport {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: CalorieResult,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.activity)?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.metrics.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.metrics.mean_speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.metrics.calories)
    }
}

/// Summary of one daily step package
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayReport {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories)
    }
}
