//! Sample Sizer
//!
//! Builds a 2×2 upsell contingency table from a per-group sample size and two
//! estimated upsell rates, then runs a one-sided Fisher's exact test to decide
//! whether the treatment shows a significant positive association with upselling.

// Modules
pub mod config;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod fisher;
pub mod report;
pub mod table;
pub mod utils;

// Individual classes, and functions
pub use config::{ConfigIO, SizerConfig};
pub use errors::SampleSizerError;
pub use evaluator::{evaluate, TestResult, TrialConfig, Verdict};
pub use fisher::{fisher_exact, Alternative, FisherResult};
pub use table::{ContingencyTable, RoundingPolicy};
