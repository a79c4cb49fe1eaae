//! Errors
//!
//! Custom error types used throughout the `sample_sizer` crate.
use thiserror::Error;

/// Errors that can occur while configuring or evaluating a trial.
#[derive(Debug, Error)]
pub enum SampleSizerError {
    /// Unable to write configuration to file.
    #[error("Unable to write configuration to file: {0}")]
    UnableToWrite(String),
    /// Unable to read configuration from file.
    #[error("Unable to read configuration from a file {0}")]
    UnableToRead(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The hypergeometric distribution could not be built for a table.
    #[error("Unable to build the null distribution: {0}")]
    Distribution(String),
}
