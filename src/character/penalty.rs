//! Death-penalty transition.
//!
//! Runs when HP reaches zero. With penalties enabled the player drops one
//! rank, loses a rank-scaled share of every stat's base and a fifth of their
//! gold. Either way HP is restored to max.

use super::player::Player;
use super::rank::Rank;
use super::stats::StatType;
use crate::core::balance::{death_gold_loss, death_stat_loss};
use crate::core::constants::NUM_STATS;
use serde::{Deserialize, Serialize};

/// Which branch a death event took.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeathOutcome {
    PenaltiesApplied,
    PenaltiesSkipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathReport {
    pub outcome: DeathOutcome,
    pub rank_before: Rank,
    pub rank_after: Rank,
    pub level_before: u32,
    pub level_after: u32,
    pub gold_lost: u64,
    /// Base points lost per stat, in `StatType::all()` order.
    pub stat_losses: [u32; NUM_STATS],
}

/// Level a death demotes to: the minimum level of the next-lower rank,
/// or level 1 when already at the lowest rank.
pub fn demotion_level(rank: Rank) -> u32 {
    rank.lower().map(|r| r.min_level()).unwrap_or(1).max(1)
}

/// Applies the death penalty to `player`.
///
/// With penalties disabled nothing but HP changes, counters included.
pub fn apply_death_penalty(player: &mut Player, penalties_enabled: bool) -> DeathReport {
    let rank_before = player.rank();
    let level_before = player.level;

    if !penalties_enabled {
        player.restore_hp();
        return DeathReport {
            outcome: DeathOutcome::PenaltiesSkipped,
            rank_before,
            rank_after: rank_before,
            level_before,
            level_after: level_before,
            gold_lost: 0,
            stat_losses: [0; NUM_STATS],
        };
    }

    player.death_count += 1;
    player.level = demotion_level(rank_before);
    player.current_xp = 0;

    let mut stat_losses = [0; NUM_STATS];
    for stat in StatType::all() {
        let entry = player.stats.get_mut(stat);
        let loss = death_stat_loss(entry.base, rank_before);
        stat_losses[stat.index()] = entry.reduce_base(loss);
    }

    let gold_lost = death_gold_loss(player.gold);
    player.gold -= gold_lost;
    player.total_gold_lost = player.total_gold_lost.saturating_add(gold_lost);

    player.restore_hp();

    DeathReport {
        outcome: DeathOutcome::PenaltiesApplied,
        rank_before,
        rank_after: player.rank(),
        level_before,
        level_after: player.level,
        gold_lost,
        stat_losses,
    }
}
