//! Contingency Table
//!
//! Turns a per-group sample size and an estimated upsell rate into integer
//! counts, and assembles the 2×2 table fed to the exact test.
use crate::errors::SampleSizerError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How fractional expected counts are turned into whole people.
///
/// The same policy is applied to both groups, since it fixes the exact
/// cell counts the test sees.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Ties go to the nearest even integer (`142.5 -> 142`).
    #[default]
    HalfToEven,
    /// Ties go away from zero (`142.5 -> 143`).
    HalfAwayFromZero,
}

impl RoundingPolicy {
    pub fn round(&self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfToEven => value.round_ties_even(),
            RoundingPolicy::HalfAwayFromZero => value.round(),
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = SampleSizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HalfToEven" | "half-to-even" => Ok(RoundingPolicy::HalfToEven),
            "HalfAwayFromZero" | "half-away-from-zero" => Ok(RoundingPolicy::HalfAwayFromZero),
            _ => Err(SampleSizerError::ParseString(
                s.to_string(),
                "RoundingPolicy".to_string(),
                items_to_strings(vec!["HalfToEven", "HalfAwayFromZero"]),
            )),
        }
    }
}

/// Split a group of `sample_size` people into `(upsell, no_upsell)` counts.
///
/// `no_upsell` is the rounded expected count; `upsell` takes the remainder so
/// the two always add back up to `sample_size`.
pub fn split_group(sample_size: u64, rate_pct: f64, rounding: RoundingPolicy) -> (u64, u64) {
    let expected_no_upsell = sample_size as f64 * (1.0 - rate_pct / 100.0);
    let no_upsell = (rounding.round(expected_no_upsell).max(0.0) as u64).min(sample_size);
    (sample_size - no_upsell, no_upsell)
}

/// 2×2 table with rows {Upsell, No Upsell} and columns {Treatment, Control}.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    pub treatment_upsell: u64,
    pub control_upsell: u64,
    pub treatment_no_upsell: u64,
    pub control_no_upsell: u64,
}

impl ContingencyTable {
    pub const ROW_LABELS: [&'static str; 2] = ["Upsell", "No Upsell"];
    pub const COLUMN_LABELS: [&'static str; 2] = ["Treatment", "Control"];

    /// Build a table directly from `[[a, b], [c, d]]`.
    pub fn new(rows: [[u64; 2]; 2]) -> Self {
        ContingencyTable {
            treatment_upsell: rows[0][0],
            control_upsell: rows[0][1],
            treatment_no_upsell: rows[1][0],
            control_no_upsell: rows[1][1],
        }
    }

    /// Derive the table from a shared group size and the two estimated rates.
    pub fn from_rates(
        sample_size: u64,
        control_rate_pct: f64,
        treatment_rate_pct: f64,
        rounding: RoundingPolicy,
    ) -> Self {
        let (control_upsell, control_no_upsell) = split_group(sample_size, control_rate_pct, rounding);
        let (treatment_upsell, treatment_no_upsell) = split_group(sample_size, treatment_rate_pct, rounding);
        ContingencyTable {
            treatment_upsell,
            control_upsell,
            treatment_no_upsell,
            control_no_upsell,
        }
    }

    pub fn rows(&self) -> [[u64; 2]; 2] {
        [
            [self.treatment_upsell, self.control_upsell],
            [self.treatment_no_upsell, self.control_no_upsell],
        ]
    }

    pub fn row_sums(&self) -> [u64; 2] {
        [
            self.treatment_upsell + self.control_upsell,
            self.treatment_no_upsell + self.control_no_upsell,
        ]
    }

    pub fn column_sums(&self) -> [u64; 2] {
        [
            self.treatment_upsell + self.treatment_no_upsell,
            self.control_upsell + self.control_no_upsell,
        ]
    }

    pub fn total(&self) -> u64 {
        self.row_sums().iter().sum()
    }

    /// A table is degenerate when any margin is zero, so the null distribution has a single point.
    pub fn is_degenerate(&self) -> bool {
        self.row_sums().contains(&0) || self.column_sums().contains(&0)
    }

    /// Exchange the treatment and control columns.
    #[cfg(test)]
    pub(crate) fn swapped(&self) -> Self {
        ContingencyTable {
            treatment_upsell: self.control_upsell,
            control_upsell: self.treatment_upsell,
            treatment_no_upsell: self.control_no_upsell,
            control_no_upsell: self.treatment_no_upsell,
        }
    }
}
