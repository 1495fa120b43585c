//! Simulation report generation.

use super::runner::RunStats;
use crate::character::rank::Rank;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub days: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_total_xp: f64,
    pub avg_deaths: f64,
    pub avg_best_streak: f64,
    pub avg_crit_rate: f64,

    // Distribution data
    pub rank_distribution: BTreeMap<Rank, u32>,

    // Boss analysis
    pub boss_defeat_rate: f64,
    pub avg_boss_defeat_day: Option<f64>,

    /// Median first day each rank was reached, among runs that reached it.
    pub median_rank_day: Vec<Option<u32>>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

fn median(mut values: Vec<u32>) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    Some(values[values.len() / 2])
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, days: u32) -> Self {
        let n = runs.len();

        let mut rank_distribution = BTreeMap::new();
        for run in &runs {
            *rank_distribution.entry(run.final_rank).or_insert(0) += 1;
        }

        let boss_days: Vec<u32> = runs.iter().filter_map(|r| r.boss_defeated_day).collect();
        let boss_defeat_rate = if n == 0 {
            0.0
        } else {
            boss_days.len() as f64 / n as f64
        };
        let avg_boss_defeat_day = if boss_days.is_empty() {
            None
        } else {
            Some(average(
                boss_days.iter().map(|d| *d as f64),
                boss_days.len(),
            ))
        };

        let median_rank_day = Rank::all()
            .iter()
            .map(|rank| {
                median(
                    runs.iter()
                        .filter_map(|r| r.rank_reached_day.get(rank.index()).copied().flatten())
                        .collect(),
                )
            })
            .collect();

        Self {
            num_runs: n as u32,
            days,
            avg_final_level: average(runs.iter().map(|r| r.final_level as f64), n),
            avg_final_gold: average(runs.iter().map(|r| r.final_gold as f64), n),
            avg_total_xp: average(runs.iter().map(|r| r.total_xp as f64), n),
            avg_deaths: average(runs.iter().map(|r| r.deaths as f64), n),
            avg_best_streak: average(runs.iter().map(|r| r.best_streak as f64), n),
            avg_crit_rate: average(runs.iter().map(|r| r.crit_rate()), n),
            rank_distribution,
            boss_defeat_rate,
            avg_boss_defeat_day,
            median_rank_day,
            run_stats: runs,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}    Days per run: {}\n\n",
            self.num_runs, self.days
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:  {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Lifetime XP:  {:.0}\n", self.avg_total_xp));
        report.push_str(&format!("  Avg Final Gold:   {:.0}\n", self.avg_final_gold));
        report.push_str(&format!("  Avg Best Streak:  {:.1} days\n", self.avg_best_streak));
        report.push_str(&format!(
            "  Crit Rate:        {:.1}%\n\n",
            self.avg_crit_rate * 100.0
        ));

        report.push_str("── FINAL RANK ───────────────────────────────────────────────────\n");
        for rank in Rank::all() {
            let count = self.rank_distribution.get(&rank).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            let pct = count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0).round() as usize);
            report.push_str(&format!("  {:>7}: {:>5.1}% {}\n", rank.abbrev(), pct, bar));
        }
        report.push('\n');

        report.push_str("── RANK PACING (median day reached) ─────────────────────────────\n");
        for rank in Rank::all() {
            if let Some(Some(day)) = self.median_rank_day.get(rank.index()) {
                report.push_str(&format!(
                    "  {:>7} ({:<17}) day {}\n",
                    rank.abbrev(),
                    rank.title(),
                    day
                ));
            }
        }
        report.push('\n');

        report.push_str("── DEATHS & BOSS ────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Deaths:       {:.2}\n", self.avg_deaths));
        report.push_str(&format!(
            "  Boss Defeated:    {:.1}% of runs\n",
            self.boss_defeat_rate * 100.0
        ));
        if let Some(day) = self.avg_boss_defeat_day {
            report.push_str(&format!("  Avg Defeat Day:   {:.1}\n", day));
        }

        report
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
