use crate::metrics::{progress_fraction, MetricKind, MetricSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum BossKind {
    /// HP pool worn down only by linked quest completions.
    Fixed,
    /// HP follows a metric reading: full at 0, empty at `target`.
    Dynamic { metric: MetricKind, target: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boss {
    pub id: String,
    pub name: String,
    pub kind: BossKind,
    pub max_hp: u64,
    pub current_hp: u64,
    pub defeated: bool,
}

impl Boss {
    pub fn new_fixed(name: impl Into<String>, max_hp: u64) -> Self {
        Self::with_kind(name.into(), BossKind::Fixed, max_hp)
    }

    /// Dynamic boss whose HP pool is the metric target, rounded.
    pub fn new_dynamic(name: impl Into<String>, metric: MetricKind, target: f64) -> Self {
        let max_hp = if target.is_finite() {
            target.round().max(1.0) as u64
        } else {
            1
        };
        Self::with_kind(name.into(), BossKind::Dynamic { metric, target }, max_hp)
    }

    fn with_kind(name: String, kind: BossKind, max_hp: u64) -> Self {
        use uuid::Uuid;

        let max_hp = max_hp.max(1);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            kind,
            max_hp,
            current_hp: max_hp,
            defeated: false,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.kind, BossKind::Dynamic { .. })
    }

    /// Fraction of HP removed, in [0, 1].
    pub fn completion(&self) -> f64 {
        1.0 - self.current_hp as f64 / self.max_hp as f64
    }

    /// Applies damage clamped at zero. Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u64) -> u64 {
        let dealt = amount.min(self.current_hp);
        self.current_hp -= dealt;
        if self.current_hp == 0 {
            self.defeated = true;
        }
        dealt
    }

    /// Recomputes HP of a dynamic boss from `snapshot`.
    ///
    /// Fixed bosses and snapshots without the boss's metric are left alone.
    /// Returns true if HP changed.
    pub fn recompute_from_metrics(&mut self, snapshot: &MetricSnapshot) -> bool {
        let BossKind::Dynamic { metric, target } = self.kind else {
            return false;
        };
        let Some(value) = snapshot.get(metric) else {
            return false;
        };

        let remaining = 1.0 - progress_fraction(value, target);
        let new_hp = ((self.max_hp as f64 * remaining).floor() as u64).min(self.max_hp);
        let changed = new_hp != self.current_hp;

        self.current_hp = new_hp;
        self.defeated = new_hp == 0;
        changed
    }
}
