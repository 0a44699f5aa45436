#![forbid(unsafe_code)]

//! Core parsing and calculation logic for the step tracker.
//!
//! This crate provides:
//! - Domain types (activity records, daily step packages, reports)
//! - Duration expression parsing
//! - Calorie engine (distance, mean speed, calories)
//! - Daily step reporter
//! - Configuration and logging setup for the CLI

pub mod types;
pub mod error;
pub mod duration;
pub mod calories;
pub mod daysteps;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use duration::{parse_duration, ParseDurationError};
pub use calories::{
    distance, mean_speed, parse_training, running_spent_calories, training_info,
    training_report, walking_spent_calories,
};
pub use daysteps::{day_action_info, day_report, parse_package};
pub use config::Config;
