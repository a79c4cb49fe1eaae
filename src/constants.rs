pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SAMPLE_SIZE: u64 = 150;
pub const DEFAULT_CONTROL_RATE_PCT: f64 = 10.0;
pub const DEFAULT_TREATMENT_RATE_PCT: f64 = 20.0;
pub const MAX_SAMPLE_SIZE: u64 = 10_000;
pub const MIN_RATE_PCT: f64 = 0.0;
pub const MAX_RATE_PCT: f64 = 100.0;
pub const REPORT_DECIMALS: usize = 5;
/// Relative tolerance when comparing table probabilities in the two-sided test.
pub const TWO_SIDED_RELATIVE_TOLERANCE: f64 = 1.0 + 1e-7;
