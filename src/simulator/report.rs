//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::error::Result;
use crate::combat::Modifier;
use crate::core::combat_math::{avg_damage, effective_crit_chance};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    // Inputs
    pub defender_hp: u32,
    pub firepower: u32,
    pub crit_chance: u32,
    pub modifier: Modifier,
    pub effective_crit_chance: u32,

    // Aggregated stats
    pub mean_hits: f64,
    pub min_hits: u32,
    pub median_hits: u32,
    pub max_hits: u32,
    pub total_crits: u64,
    pub observed_crit_rate: f64,
    pub expected_damage: f64,

    /// hits → number of runs that needed exactly that many
    pub histogram: BTreeMap<u32, u32>,
}

impl SimReport {
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let total_hits: u64 = runs.iter().map(|r| r.hits as u64).sum();
        let total_crits: u64 = runs.iter().map(|r| r.crits as u64).sum();
        let mean_hits = total_hits as f64 / num_runs.max(1) as f64;
        let observed_crit_rate = total_crits as f64 / total_hits.max(1) as f64;

        let mut sorted: Vec<u32> = runs.iter().map(|r| r.hits).collect();
        sorted.sort_unstable();
        let min_hits = sorted.first().copied().unwrap_or(0);
        let max_hits = sorted.last().copied().unwrap_or(0);
        let median_hits = sorted.get(sorted.len() / 2).copied().unwrap_or(0);

        let mut histogram = BTreeMap::new();
        for run in &runs {
            *histogram.entry(run.hits).or_insert(0) += 1;
        }

        let effective = effective_crit_chance(config.crit_chance, config.modifier);

        Self {
            num_runs,
            runs_timed_out,
            defender_hp: config.defender_hp,
            firepower: config.firepower,
            crit_chance: config.crit_chance,
            modifier: config.modifier,
            effective_crit_chance: effective,
            mean_hits,
            min_hits,
            median_hits,
            max_hits,
            total_crits,
            observed_crit_rate,
            expected_damage: avg_damage(config.firepower, effective),
            histogram,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    HITS-TO-DESTROY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── MATCHUP ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Defender HP:         {}\n", self.defender_hp));
        report.push_str(&format!("  Firepower:           {}\n", self.firepower));
        report.push_str(&format!(
            "  Crit Chance:         {}% ({:?} → {}%)\n",
            self.crit_chance, self.modifier, self.effective_crit_chance
        ));
        report.push_str(&format!(
            "  Expected Damage/Hit: {:.2}\n\n",
            self.expected_damage
        ));

        report.push_str("── HITS ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean:    {:.2}\n", self.mean_hits));
        report.push_str(&format!("  Min:     {}\n", self.min_hits));
        report.push_str(&format!("  Median:  {}\n", self.median_hits));
        report.push_str(&format!("  Max:     {}\n", self.max_hits));
        report.push_str(&format!(
            "  Crit Rate (observed): {:.1}%\n\n",
            self.observed_crit_rate * 100.0
        ));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        for (hits, count) in &self.histogram {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:3} hits: {:>5.1}% {}\n", hits, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Average hits to destroy over a firepower × crit chance sweep.
#[derive(Debug, Clone, Serialize)]
pub struct HitsGrid {
    pub defender_hp: u32,
    pub firepowers: Vec<u32>,
    pub crit_chances: Vec<u32>,
    /// `cells[firepower_idx][crit_idx]`
    pub cells: Vec<Vec<f64>>,
}

impl HitsGrid {
    pub fn to_text(&self) -> String {
        let mut out = format!("Defender HP: {}\n\n", self.defender_hp);
        out.push_str("  FP \\ Crit");
        for crit in &self.crit_chances {
            out.push_str(&format!(" {:>6}", format!("{}%", crit)));
        }
        out.push('\n');
        for (firepower, row) in self.firepowers.iter().zip(&self.cells) {
            out.push_str(&format!("  {:>9}", firepower));
            for value in row {
                out.push_str(&format!(" {:>6.2}", value));
            }
            out.push('\n');
        }
        out
    }
}
