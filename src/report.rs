//! Report
//!
//! Presentation of an evaluation: the contingency table, odds ratio, p-value
//! and the verdict sentence, either as plain text or as JSON.
use crate::constants::REPORT_DECIMALS;
use crate::errors::SampleSizerError;
use crate::evaluator::{TestResult, TrialConfig, Verdict};
use crate::table::ContingencyTable;
use crate::utils::{items_to_strings, round_to};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const REJECT_NULL_MESSAGE: &str =
    "There IS a link between a remuneration promo and upselling.\nWe REJECT the null hypothesis";
pub const FAIL_TO_REJECT_MESSAGE: &str =
    "We CANNOT PROVE there is a link between a remuneration promo and upselling.\nWe DO NOT REJECT the null hypothesis";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SampleSizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" | "text" => Ok(OutputFormat::Text),
            "Json" | "json" => Ok(OutputFormat::Json),
            _ => Err(SampleSizerError::ParseString(
                s.to_string(),
                "OutputFormat".to_string(),
                items_to_strings(vec!["Text", "Json"]),
            )),
        }
    }
}

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::RejectNull => REJECT_NULL_MESSAGE,
        Verdict::FailToReject => FAIL_TO_REJECT_MESSAGE,
    }
}

/// Render the table with labelled rows and columns, right aligned.
pub fn render_table(table: &ContingencyTable) -> String {
    let rows = table.rows();
    let label_width = ContingencyTable::ROW_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
    let cell_width = rows
        .iter()
        .flatten()
        .map(|c| c.to_string().len())
        .chain(ContingencyTable::COLUMN_LABELS.iter().map(|l| l.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:label_width$}", "");
    for label in ContingencyTable::COLUMN_LABELS {
        out.push_str(&format!("  {:>cell_width$}", label));
    }
    for (label, row) in ContingencyTable::ROW_LABELS.iter().zip(rows.iter()) {
        out.push('\n');
        out.push_str(&format!("{:label_width$}", label));
        for count in row {
            out.push_str(&format!("  {:>cell_width$}", count));
        }
    }
    out
}

pub fn render_text(trial: &TrialConfig, result: &TestResult) -> String {
    // Rates are echoed as entered, so 10.25 stays 10.25.
    format!(
        "Upsell rate for control group = {:?}%\n\
         Upsell rate for treatment group = {:?}%\n\n\
         {}\n\n\
         Odds Ratio: {}\n\
         P-value: {}\n\
         {}",
        trial.control_rate_pct,
        trial.treatment_rate_pct,
        render_table(&result.table),
        round_to(result.odds_ratio, REPORT_DECIMALS),
        round_to(result.p_value, REPORT_DECIMALS),
        verdict_message(result.verdict),
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    trial: &'a TrialConfig,
    result: &'a TestResult,
    significant: bool,
    message: &'static str,
}

pub fn render_json(trial: &TrialConfig, result: &TestResult) -> Result<String, SampleSizerError> {
    let report = JsonReport {
        trial,
        result,
        significant: result.verdict.is_significant(),
        message: verdict_message(result.verdict),
    };
    serde_json::to_string_pretty(&report).map_err(|e| SampleSizerError::UnableToWrite(e.to_string()))
}

pub fn render(format: OutputFormat, trial: &TrialConfig, result: &TestResult) -> Result<String, SampleSizerError> {
    match format {
        OutputFormat::Text => Ok(render_text(trial, result)),
        OutputFormat::Json => render_json(trial, result),
    }
}
