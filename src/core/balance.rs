//! Reward and progression formulas.
//!
//! Every number the engine hands out is computed here from the tables in
//! `constants`. Nothing in this module touches state.

use super::constants::*;
use crate::character::rank::Rank;
use crate::quests::types::Difficulty;

/// XP needed to advance from `level - 1` to `level`.
///
/// `floor(level * 100 * 1.5^(level / 10))`. Strictly increasing on
/// `1..=MAX_LEVEL`; levels past the cap cannot be reached and cost `u64::MAX`.
pub fn xp_required_for_level(level: u32) -> u64 {
    if level > MAX_LEVEL {
        return u64::MAX;
    }
    let level = level as f64;
    (level * XP_CURVE_BASE * XP_CURVE_GROWTH.powf(level / XP_CURVE_GROWTH_PERIOD)).floor() as u64
}

/// Base quest XP for a difficulty scaled by `multiplier`, floored.
pub fn quest_xp(difficulty: Difficulty, multiplier: f64) -> u64 {
    (QUEST_XP_TABLE[difficulty.index()] as f64 * multiplier).floor() as u64
}

/// Gold table lookup. Optional quests are zeroed by the caller, not here.
pub fn quest_gold(difficulty: Difficulty) -> u64 {
    QUEST_GOLD_TABLE[difficulty.index()]
}

pub fn stat_xp(difficulty: Difficulty) -> u64 {
    STAT_XP_TABLE[difficulty.index()]
}

/// Linear streak bonus, capped at +100%.
pub fn streak_multiplier(streak_days: u32) -> f64 {
    (1.0 + streak_days as f64 * STREAK_BONUS_PER_DAY).min(STREAK_MULTIPLIER_CAP)
}

/// Damage a completed quest deals to its linked boss.
pub fn boss_damage(difficulty: Difficulty, player_level: u32) -> u64 {
    let base = quest_xp(difficulty, 1.0) as f64;
    (base * (1.0 + player_level as f64 / BOSS_DAMAGE_LEVEL_DIVISOR)).floor() as u64
}

/// HP lost at day end for missed non-optional quests.
pub fn penalty_damage(missed_quest_count: u32) -> u32 {
    missed_quest_count.saturating_mul(HP_DAMAGE_PER_MISSED_QUEST)
}

pub fn rank_for_level(level: u32) -> Rank {
    Rank::for_level(level)
}

/// Gold removed by a death penalty.
pub fn death_gold_loss(gold: u64) -> u64 {
    (gold as u128 * DEATH_GOLD_LOSS_PERCENT as u128 / 100) as u64
}

/// Base points a stat loses on death at `rank`, floored.
pub fn death_stat_loss(base: u32, rank: Rank) -> u32 {
    (base as u64 * DEATH_STAT_LOSS_PERCENT[rank.index()] as u64 / 100) as u32
}
