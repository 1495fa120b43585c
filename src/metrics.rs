//! External metric readings.
//!
//! Health, location and screen-time providers live outside the engine. The
//! host reads them and hands the engine a plain `MetricSnapshot`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Steps,
    DistanceKm,
    ActiveCalories,
    ExerciseMinutes,
    SleepHours,
    LocationVisits,
    /// Minutes of screen time kept under the user's limit.
    ScreenTimeSavedMinutes,
}

impl MetricKind {
    pub fn all() -> [MetricKind; 7] {
        [
            MetricKind::Steps,
            MetricKind::DistanceKm,
            MetricKind::ActiveCalories,
            MetricKind::ExerciseMinutes,
            MetricKind::SleepHours,
            MetricKind::LocationVisits,
            MetricKind::ScreenTimeSavedMinutes,
        ]
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::DistanceKm => "km",
            MetricKind::ActiveCalories => "kcal",
            MetricKind::ExerciseMinutes | MetricKind::ScreenTimeSavedMinutes => "min",
            MetricKind::SleepHours => "h",
            MetricKind::LocationVisits => "visits",
        }
    }
}

/// Point-in-time readings. Missing metrics read as absent, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    values: HashMap<MetricKind, f64>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reading. Negative and non-finite values are stored as zero.
    pub fn set(&mut self, metric: MetricKind, value: f64) {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        self.values.insert(metric, value);
    }

    pub fn with(mut self, metric: MetricKind, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    pub fn get(&self, metric: MetricKind) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fraction of `target` reached by `value`, clamped to [0, 1].
/// A non-positive target counts as already met.
pub fn progress_fraction(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 1.0;
    }
    (value / target).clamp(0.0, 1.0)
}

/// Supplies metric snapshots to the engine.
///
/// Implemented by the host around whatever platform services it has.
pub trait MetricSource {
    fn snapshot(&self) -> MetricSnapshot;
}

/// A source that always returns the same readings.
#[derive(Debug, Clone, Default)]
pub struct FixedMetrics(pub MetricSnapshot);

impl MetricSource for FixedMetrics {
    fn snapshot(&self) -> MetricSnapshot {
        self.0.clone()
    }
}
