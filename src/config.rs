//! Sizer Configuration
//!
//! Persistent inputs of the calculator: the trial to evaluate plus
//! presentation preferences, readable from and writable to JSON.
use crate::constants::{
    DEFAULT_CONTROL_RATE_PCT, DEFAULT_SAMPLE_SIZE, DEFAULT_SIGNIFICANCE_THRESHOLD, DEFAULT_TREATMENT_RATE_PCT,
};
use crate::errors::SampleSizerError;
use crate::evaluator::TrialConfig;
use crate::fisher::Alternative;
use crate::report::OutputFormat;
use crate::table::RoundingPolicy;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_sample_size() -> u64 {
    DEFAULT_SAMPLE_SIZE
}
fn default_control_rate_pct() -> f64 {
    DEFAULT_CONTROL_RATE_PCT
}
fn default_treatment_rate_pct() -> f64 {
    DEFAULT_TREATMENT_RATE_PCT
}
fn default_significance_threshold() -> f64 {
    DEFAULT_SIGNIFICANCE_THRESHOLD
}

/// Configuration for the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizerConfig {
    /// People in each group.
    #[serde(default = "default_sample_size")]
    pub sample_size: u64,
    /// Estimated control upsell rate (%).
    #[serde(default = "default_control_rate_pct")]
    pub control_rate_pct: f64,
    /// Estimated treatment upsell rate (%).
    #[serde(default = "default_treatment_rate_pct")]
    pub treatment_rate_pct: f64,
    /// p-value threshold below which the null hypothesis is rejected.
    #[serde(default = "default_significance_threshold")]
    pub significance_threshold: f64,
    /// Rounding applied to expected counts.
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Direction of the exact test.
    #[serde(default)]
    pub alternative: Alternative,
    /// How results are printed.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for SizerConfig {
    fn default() -> Self {
        SizerConfig {
            sample_size: DEFAULT_SAMPLE_SIZE,
            control_rate_pct: DEFAULT_CONTROL_RATE_PCT,
            treatment_rate_pct: DEFAULT_TREATMENT_RATE_PCT,
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            rounding: RoundingPolicy::HalfToEven,
            alternative: Alternative::Greater,
            output: OutputFormat::Text,
        }
    }
}

impl SizerConfig {
    /// The trial described by this configuration.
    pub fn trial(&self) -> TrialConfig {
        TrialConfig::new(self.sample_size, self.control_rate_pct, self.treatment_rate_pct)
            .with_significance_threshold(self.significance_threshold)
            .with_rounding(self.rounding)
            .with_alternative(self.alternative)
    }

    /// Check the input ranges the calculator accepts.
    pub fn validate(&self) -> Result<(), SampleSizerError> {
        self.trial().validate()
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), SampleSizerError> {
        fs::write(path, self.json_dump()?).map_err(|e| SampleSizerError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, SampleSizerError> {
        serde_json::to_string_pretty(self).map_err(|e| SampleSizerError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, SampleSizerError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| SampleSizerError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, SampleSizerError> {
        let json_str = fs::read_to_string(path).map_err(|e| SampleSizerError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for SizerConfig {}
