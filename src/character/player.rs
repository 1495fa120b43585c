use super::rank::Rank;
use super::stats::Stats;
use crate::core::balance::xp_required_for_level;
use crate::core::constants::{MAX_LEVEL, STARTING_LEVEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub level: u32,
    /// Progress toward the next level; spent on level-up.
    pub current_xp: u64,
    /// Lifetime XP, never reduced by leveling.
    pub total_xp: u64,
    pub gold: u64,
    pub stats: Stats,
    pub current_hp: u32,
    pub max_hp: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Deaths that applied penalties.
    #[serde(default)]
    pub death_count: u32,
    #[serde(default)]
    pub total_gold_lost: u64,
}

impl Player {
    pub fn new(name: String, created_at: i64, max_hp: u32) -> Self {
        use uuid::Uuid;

        let max_hp = max_hp.max(1);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at,
            level: STARTING_LEVEL,
            current_xp: 0,
            total_xp: 0,
            gold: 0,
            stats: Stats::new(),
            current_hp: max_hp,
            max_hp,
            current_streak: 0,
            best_streak: 0,
            death_count: 0,
            total_gold_lost: 0,
        }
    }

    pub fn rank(&self) -> Rank {
        Rank::for_level(self.level)
    }

    /// XP still missing before the next level-up. Zero at the level cap.
    pub fn xp_to_next_level(&self) -> u64 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        xp_required_for_level(self.level + 1).saturating_sub(self.current_xp)
    }

    /// Applies XP and processes any level-ups.
    /// Returns the number of levels gained. Levels stop at `MAX_LEVEL`; XP
    /// earned there still accumulates.
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        self.current_xp = self.current_xp.saturating_add(amount);
        self.total_xp = self.total_xp.saturating_add(amount);

        let mut levelups = 0;
        while self.level < MAX_LEVEL {
            let xp_needed = xp_required_for_level(self.level + 1);

            if self.current_xp >= xp_needed {
                self.current_xp -= xp_needed;
                self.level += 1;
                levelups += 1;
            } else {
                break;
            }
        }

        levelups
    }

    /// Lowers HP, saturating at zero. Returns true if HP is now zero.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_dead()
    }

    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn restore_hp(&mut self) {
        self.current_hp = self.max_hp;
    }

    pub fn is_dead(&self) -> bool {
        self.current_hp == 0
    }
}
