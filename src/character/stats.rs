use crate::core::constants::{
    BASE_STAT_VALUE, MIN_STAT_BASE, NUM_STATS, STAT_VALUE_CAP, STAT_XP_PER_POINT,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Agility,
    Vitality,
    Intelligence,
    Perception,
    Willpower,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Vitality,
            StatType::Intelligence,
            StatType::Perception,
            StatType::Willpower,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatType::Strength => "STR",
            StatType::Agility => "AGI",
            StatType::Vitality => "VIT",
            StatType::Intelligence => "INT",
            StatType::Perception => "PER",
            StatType::Willpower => "WIL",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Agility => 1,
            StatType::Vitality => 2,
            StatType::Intelligence => 3,
            StatType::Perception => 4,
            StatType::Willpower => 5,
        }
    }
}

/// A single stat. `base` grows by one point per `STAT_XP_PER_POINT` experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub base: u32,
    pub bonus: u32,
    pub experience: u64,
}

impl Default for Stat {
    fn default() -> Self {
        Self {
            base: BASE_STAT_VALUE,
            bonus: 0,
            experience: 0,
        }
    }
}

impl Stat {
    pub fn level(&self) -> u64 {
        self.experience / STAT_XP_PER_POINT
    }

    pub fn total_value(&self) -> u32 {
        self.base.saturating_add(self.bonus).min(STAT_VALUE_CAP)
    }

    /// Adds experience and returns the number of base points gained.
    pub fn gain_experience(&mut self, amount: u64) -> u32 {
        let before = self.level();
        self.experience = self.experience.saturating_add(amount);
        let gained = (self.level() - before).min(u32::MAX as u64) as u32;
        self.base = self.base.saturating_add(gained).min(STAT_VALUE_CAP);
        gained
    }

    /// Lowers base by `amount`, never below `MIN_STAT_BASE`. Returns the points actually lost.
    pub fn reduce_base(&mut self, amount: u32) -> u32 {
        let new_base = self.base.saturating_sub(amount).max(MIN_STAT_BASE);
        let lost = self.base.saturating_sub(new_base);
        self.base = new_base;
        lost
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    values: [Stat; NUM_STATS],
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatType) -> &Stat {
        &self.values[stat.index()]
    }

    pub fn get_mut(&mut self, stat: StatType) -> &mut Stat {
        &mut self.values[stat.index()]
    }

    pub fn total_value(&self, stat: StatType) -> u32 {
        self.get(stat).total_value()
    }

    pub fn set_bonus(&mut self, stat: StatType, bonus: u32) {
        self.get_mut(stat).bonus = bonus;
    }

    /// Sum of all total values, handy for summaries.
    pub fn power(&self) -> u32 {
        StatType::all()
            .iter()
            .map(|s| self.total_value(*s))
            .sum()
    }
}
