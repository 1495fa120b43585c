use crate::character::stats::StatType;
use crate::metrics::MetricKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Trivial,
    Easy,
    Normal,
    Hard,
    Extreme,
    Legendary,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 6] {
        [
            Difficulty::Trivial,
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Extreme,
            Difficulty::Legendary,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Trivial => 0,
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
            Difficulty::Extreme => 4,
            Difficulty::Legendary => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Trivial => "Trivial",
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
            Difficulty::Legendary => "Legendary",
        }
    }
}

/// How a quest's progress is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TrackingType {
    /// The user marks the quest done.
    Manual,
    /// Progress follows a metric reading toward `target`.
    Automatic { metric: MetricKind, target: f64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum QuestStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    /// Optional quests grant no gold and never cost HP when missed.
    pub optional: bool,
    pub stat: StatType,
    pub tracking: TrackingType,
    /// Completion fraction in [0, 1].
    pub progress: f64,
    pub status: QuestStatus,
    /// Lookup key of a linked boss, if any.
    pub boss_id: Option<String>,
    #[serde(default)]
    pub times_completed: u32,
}

impl Quest {
    pub fn new(title: impl Into<String>, difficulty: Difficulty, stat: StatType) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            difficulty,
            optional: false,
            stat,
            tracking: TrackingType::Manual,
            progress: 0.0,
            status: QuestStatus::Pending,
            boss_id: None,
            times_completed: 0,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn tracked(mut self, metric: MetricKind, target: f64) -> Self {
        self.tracking = TrackingType::Automatic { metric, target };
        self
    }

    pub fn linked_to(mut self, boss_id: impl Into<String>) -> Self {
        self.boss_id = Some(boss_id.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuestStatus::Completed
    }

    /// Whether missing this quest costs HP at day end.
    pub fn penalty_eligible(&self) -> bool {
        !self.optional
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self.tracking, TrackingType::Automatic { .. })
    }

    /// Back to a fresh pending state for a new day.
    pub fn reset(&mut self) {
        self.status = QuestStatus::Pending;
        self.progress = 0.0;
    }
}
