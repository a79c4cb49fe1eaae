//! Upsell Significance Evaluator
//!
//! Maps a per-group sample size and two estimated upsell rates to a decision:
//! build the contingency table, run Fisher's exact test (one-sided "greater"
//! unless configured otherwise), and compare its p-value against the
//! significance threshold.
use crate::constants::{DEFAULT_SIGNIFICANCE_THRESHOLD, MAX_RATE_PCT, MAX_SAMPLE_SIZE, MIN_RATE_PCT};
use crate::errors::SampleSizerError;
use crate::fisher::{fisher_exact, Alternative};
use crate::table::{ContingencyTable, RoundingPolicy};
use crate::utils::{validate_float_parameter, validate_open_unit_interval};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Outcome of the hypothesis test.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Evidence of a positive association between treatment and upsell.
    RejectNull,
    /// No significant association could be shown.
    FailToReject,
}

impl Verdict {
    pub fn from_p_value(p_value: f64, significance_threshold: f64) -> Self {
        if p_value < significance_threshold {
            Verdict::RejectNull
        } else {
            Verdict::FailToReject
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Verdict::RejectNull)
    }
}

/// Inputs of a single evaluation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct TrialConfig {
    /// People in each of the treatment and control groups.
    pub sample_size_per_group: u64,
    /// Estimated control upsell rate, in percent.
    pub control_rate_pct: f64,
    /// Estimated treatment upsell rate, in percent.
    pub treatment_rate_pct: f64,
    /// p-values strictly below this reject the null hypothesis.
    pub significance_threshold: f64,
    pub rounding: RoundingPolicy,
    /// Direction of the exact test; the calculator asks whether treatment is better.
    #[serde(default)]
    pub alternative: Alternative,
}

impl TrialConfig {
    /// New trial with the default threshold and rounding policy.
    pub fn new(sample_size_per_group: u64, control_rate_pct: f64, treatment_rate_pct: f64) -> Self {
        TrialConfig {
            sample_size_per_group,
            control_rate_pct,
            treatment_rate_pct,
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            rounding: RoundingPolicy::default(),
            alternative: Alternative::Greater,
        }
    }

    pub fn with_significance_threshold(mut self, significance_threshold: f64) -> Self {
        self.significance_threshold = significance_threshold;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    pub fn validate(&self) -> Result<(), SampleSizerError> {
        if self.sample_size_per_group > MAX_SAMPLE_SIZE {
            return Err(SampleSizerError::InvalidParameter(
                "sample_size_per_group".to_string(),
                format!("integer within range 0 and {}", MAX_SAMPLE_SIZE),
                self.sample_size_per_group.to_string(),
            ));
        }
        validate_float_parameter(self.control_rate_pct, MIN_RATE_PCT, MAX_RATE_PCT, "control_rate_pct")?;
        validate_float_parameter(self.treatment_rate_pct, MIN_RATE_PCT, MAX_RATE_PCT, "treatment_rate_pct")?;
        validate_open_unit_interval(self.significance_threshold, "significance_threshold")
    }

    pub fn contingency_table(&self) -> ContingencyTable {
        ContingencyTable::from_rates(
            self.sample_size_per_group,
            self.control_rate_pct,
            self.treatment_rate_pct,
            self.rounding,
        )
    }

    /// Build the table, run the exact test in the configured direction, and classify the result.
    pub fn evaluate(&self) -> Result<TestResult, SampleSizerError> {
        self.validate()?;
        let table = self.contingency_table();
        if table.is_degenerate() {
            warn!(
                "Contingency table {:?} has an empty row or column, the test cannot detect any difference.",
                table.rows()
            );
        }
        let fisher = fisher_exact(&table, self.alternative)?;
        let verdict = Verdict::from_p_value(fisher.p_value, self.significance_threshold);
        debug!(
            "Table {:?}: odds ratio {}, p-value {}, verdict {:?}.",
            table.rows(),
            fisher.odds_ratio,
            fisher.p_value,
            verdict
        );
        Ok(TestResult {
            table,
            odds_ratio: fisher.odds_ratio,
            p_value: fisher.p_value,
            significance_threshold: self.significance_threshold,
            verdict,
        })
    }
}

/// Report of one evaluation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct TestResult {
    pub table: ContingencyTable,
    pub odds_ratio: f64,
    pub p_value: f64,
    pub significance_threshold: f64,
    pub verdict: Verdict,
}

/// Evaluate a trial with the default rounding policy.
///
/// * `sample_size` - People in each group.
/// * `control_rate_pct` - Estimated control upsell rate, between 0 and 100.
/// * `treatment_rate_pct` - Estimated treatment upsell rate, between 0 and 100.
/// * `significance_threshold` - Rejection threshold for the p-value, usually `DEFAULT_SIGNIFICANCE_THRESHOLD`.
pub fn evaluate(
    sample_size: u64,
    control_rate_pct: f64,
    treatment_rate_pct: f64,
    significance_threshold: f64,
) -> Result<TestResult, SampleSizerError> {
    TrialConfig::new(sample_size, control_rate_pct, treatment_rate_pct)
        .with_significance_threshold(significance_threshold)
        .evaluate()
}
