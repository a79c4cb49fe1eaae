//! Fisher's Exact Test
//!
//! Exact test of association on a 2×2 [`ContingencyTable`]. With both margins
//! held fixed, the top-left cell (treatment upsells) follows a hypergeometric
//! distribution, so each p-value is a sum over that distribution's support.
use crate::constants::TWO_SIDED_RELATIVE_TOLERANCE;
use crate::errors::SampleSizerError;
use crate::table::ContingencyTable;
use crate::utils::items_to_strings;
use log::debug;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Discrete, Hypergeometric};
use std::str::FromStr;

/// Direction of the alternative hypothesis, relative to the treatment column.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// Treatment upsell odds are higher than control.
    #[default]
    Greater,
    /// Treatment upsell odds are lower than control.
    Less,
    /// Odds differ in either direction.
    TwoSided,
}

impl FromStr for Alternative {
    type Err = SampleSizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Greater" | "greater" => Ok(Alternative::Greater),
            "Less" | "less" => Ok(Alternative::Less),
            "TwoSided" | "two-sided" => Ok(Alternative::TwoSided),
            _ => Err(SampleSizerError::ParseString(
                s.to_string(),
                "Alternative".to_string(),
                items_to_strings(vec!["Greater", "Less", "TwoSided"]),
            )),
        }
    }
}

/// Sample odds ratio and p-value of one exact test.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct FisherResult {
    /// `(a * d) / (b * c)`; infinite when `b` or `c` is zero, NaN for degenerate tables.
    pub odds_ratio: f64,
    pub p_value: f64,
}

/// Unconditional sample odds ratio of the table.
pub fn odds_ratio(table: &ContingencyTable) -> f64 {
    if table.control_upsell > 0 && table.treatment_no_upsell > 0 {
        (table.treatment_upsell as f64 * table.control_no_upsell as f64)
            / (table.control_upsell as f64 * table.treatment_no_upsell as f64)
    } else {
        f64::INFINITY
    }
}

/// Hypergeometric null distribution of the treatment upsell count, with its support bounds.
struct NullDistribution {
    dist: Hypergeometric,
    low: u64,
    high: u64,
}

impl NullDistribution {
    fn new(table: &ContingencyTable) -> Result<Self, SampleSizerError> {
        let population = table.total();
        let successes = table.row_sums()[0];
        let draws = table.column_sums()[0];
        debug!(
            "Null distribution: population {}, upsells {}, treatment size {}.",
            population, successes, draws
        );
        let dist = Hypergeometric::new(population, successes, draws)
            .map_err(|e| SampleSizerError::Distribution(e.to_string()))?;
        Ok(NullDistribution {
            dist,
            low: draws.saturating_sub(population - successes),
            high: successes.min(draws),
        })
    }

    fn pmf(&self, x: u64) -> f64 {
        self.dist.ln_pmf(x).exp()
    }

    fn sum_between(&self, from: u64, to: u64) -> f64 {
        (from.max(self.low)..=to.min(self.high)).map(|x| self.pmf(x)).sum()
    }

    /// P(X >= x)
    fn upper_tail(&self, x: u64) -> f64 {
        self.sum_between(x, self.high)
    }

    /// P(X <= x)
    fn lower_tail(&self, x: u64) -> f64 {
        self.sum_between(self.low, x)
    }

    /// Total probability of every outcome no more likely than `x`.
    fn two_sided(&self, x: u64) -> f64 {
        let cutoff = self.pmf(x) * TWO_SIDED_RELATIVE_TOLERANCE;
        (self.low..=self.high).map(|k| self.pmf(k)).filter(|p| *p <= cutoff).sum()
    }
}

/// Run Fisher's exact test on a 2×2 table.
///
/// Tables with an empty row or column carry no information; they return a NaN
/// odds ratio and a p-value of exactly 1.
pub fn fisher_exact(table: &ContingencyTable, alternative: Alternative) -> Result<FisherResult, SampleSizerError> {
    if table.is_degenerate() {
        return Ok(FisherResult {
            odds_ratio: f64::NAN,
            p_value: 1.0,
        });
    }

    let null = NullDistribution::new(table)?;
    let observed = table.treatment_upsell;
    let p_value = match alternative {
        Alternative::Greater => null.upper_tail(observed),
        Alternative::Less => null.lower_tail(observed),
        Alternative::TwoSided => null.two_sided(observed),
    };

    Ok(FisherResult {
        odds_ratio: odds_ratio(table),
        p_value: p_value.clamp(0.0, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_alternative_from_str() {
        assert_eq!("greater".parse::<Alternative>().unwrap(), Alternative::Greater);
        assert_eq!("Less".parse::<Alternative>().unwrap(), Alternative::Less);
        assert_eq!("two-sided".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert!("sideways".parse::<Alternative>().is_err());
    }

    #[test]
    fn test_greater_upsell_table() {
        let table = ContingencyTable::new([[30, 15], [120, 135]]);
        let res = fisher_exact(&table, Alternative::Greater).unwrap();
        assert_close(res.p_value, 0.011405397560066255);
        assert_close(res.odds_ratio, 2.25);
    }

    #[test]
    fn test_less_upsell_table() {
        let table = ContingencyTable::new([[30, 15], [120, 135]]);
        let res = fisher_exact(&table, Alternative::Less).unwrap();
        assert_close(res.p_value, 0.9954426787480831);
    }

    #[test]
    fn test_small_table() {
        // Tea tasting: [[3, 1], [1, 3]].
        let table = ContingencyTable::new([[3, 1], [1, 3]]);
        let greater = fisher_exact(&table, Alternative::Greater).unwrap();
        assert_close(greater.p_value, 17.0 / 70.0);
        assert_close(greater.odds_ratio, 9.0);

        let two_sided = fisher_exact(&table, Alternative::TwoSided).unwrap();
        assert_close(two_sided.p_value, 34.0 / 70.0);
    }

    #[test]
    fn test_swapped_columns_mirror_tails() {
        let table = ContingencyTable::new([[30, 15], [120, 135]]);
        let greater = fisher_exact(&table, Alternative::Greater).unwrap();
        let less = fisher_exact(&table.swapped(), Alternative::Less).unwrap();
        assert_close(greater.p_value, less.p_value);
        assert_close(less.odds_ratio, 1.0 / 2.25);
    }

    #[test]
    fn test_two_sided_is_at_least_one_tail() {
        let table = ContingencyTable::new([[30, 15], [120, 135]]);
        let greater = fisher_exact(&table, Alternative::Greater).unwrap().p_value;
        let two_sided = fisher_exact(&table, Alternative::TwoSided).unwrap().p_value;
        assert!(two_sided >= greater);
        assert!(two_sided <= 1.0);
    }

    #[test]
    fn test_infinite_odds_ratio() {
        let table = ContingencyTable::new([[5, 0], [5, 10]]);
        let res = fisher_exact(&table, Alternative::Greater).unwrap();
        assert!(res.odds_ratio.is_infinite());
        // Only the observed table is that extreme: C(10,5)/C(20,5).
        assert_close(res.p_value, 252.0 / 15504.0);
    }

    #[test]
    fn test_degenerate_table() {
        let table = ContingencyTable::new([[0, 0], [0, 0]]);
        for alternative in [Alternative::Greater, Alternative::Less, Alternative::TwoSided] {
            let res = fisher_exact(&table, alternative).unwrap();
            assert_eq!(res.p_value, 1.0);
            assert!(res.odds_ratio.is_nan());
        }
        let no_upsells = ContingencyTable::new([[0, 0], [20, 20]]);
        assert_eq!(fisher_exact(&no_upsells, Alternative::Greater).unwrap().p_value, 1.0);
    }

    #[test]
    fn test_large_table_is_finite() {
        let table = ContingencyTable::new([[1200, 1000], [8800, 9000]]);
        let res = fisher_exact(&table, Alternative::Greater).unwrap();
        assert!(res.p_value.is_finite());
        assert!(res.p_value > 0.0 && res.p_value < 0.01);
    }
}
