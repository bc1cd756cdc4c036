//! Batch Scoring
//!
//! Loads a CSV of assessments with Polars, scores every row in parallel with
//! Rayon and writes one result row per assessment.
//!
//! Expected columns (header row required):
//!   id (optional), age, gender (optional), weight, height, mallampati, tmd,
//!   inter_incisor_gap, neck_mobility, jaw_protrusion, ulbt, osa, arthritis,
//!   radiation_history, previous_difficulty
//!
//! Empty cells are read as unset. Numeric columns are cast to Float64 and
//! categorical columns to String, so `mallampati` may be stored as 1-4.
//! Text in a numeric column fails the load rather than reading as unmeasured.

use crate::assessment::*;
use crate::recommendation::RiskTier;
use crate::scorer::{RiskEngine, RiskResult, MAX_SCORE};
use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

const NUMERIC_COLUMNS: [&str; 5] = ["age", "weight", "height", "tmd", "inter_incisor_gap"];

const CATEGORICAL_COLUMNS: [&str; 8] = [
    "mallampati",
    "neck_mobility",
    "jaw_protrusion",
    "ulbt",
    "osa",
    "arthritis",
    "radiation_history",
    "previous_difficulty",
];

/// Assessment with the identifier it was loaded under
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub id: String,
    pub assessment: PatientAssessment,
}

/// Scored assessment
#[derive(Debug, Clone)]
pub struct BatchRow {
    pub id: String,
    pub result: RiskResult,
}

impl BatchRow {
    /// Largest contributor, first in rule order on ties
    pub fn top_factor(&self) -> Option<&str> {
        self.result
            .contributors
            .iter()
            .rev()
            .max_by_key(|c| c.contribution)
            .map(|c| c.factor.as_str())
    }
}

/// Load assessments from a CSV file
pub fn load_assessments(path: &Path) -> Result<Vec<BatchInput>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
        .finish()
        .with_context(|| format!("Failed to load assessments CSV: {:?}", path))?;

    tracing::info!("Loaded {} assessment rows from {:?}", df.height(), path);
    assessments_from_frame(&df)
}

/// Convert a DataFrame of assessments into typed records
pub fn assessments_from_frame(df: &DataFrame) -> Result<Vec<BatchInput>> {
    let available: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for &expected in NUMERIC_COLUMNS.iter().chain(CATEGORICAL_COLUMNS.iter()) {
        if !available.iter().any(|c| c == expected) {
            return Err(anyhow!(
                "Assessments: Missing expected column '{}'. Available columns: {:?}",
                expected, available
            ));
        }
    }

    let ids = match df.column("id") {
        Ok(_) => string_column(df, "id")?,
        Err(_) => vec![None; df.height()],
    };
    let genders = match df.column("gender") {
        Ok(_) => string_column(df, "gender")?,
        Err(_) => vec![None; df.height()],
    };

    let mut numeric: FxHashMap<&str, Vec<Option<f64>>> = FxHashMap::default();
    for name in NUMERIC_COLUMNS {
        numeric.insert(name, float_column(df, name)?);
    }
    let mut categorical: FxHashMap<&str, Vec<Option<String>>> = FxHashMap::default();
    for name in CATEGORICAL_COLUMNS {
        categorical.insert(name, string_column(df, name)?);
    }

    let number = |name: &str, row: usize| numeric[name][row].unwrap_or(0.0);
    let text = |name: &str, row: usize| categorical[name][row].as_deref().unwrap_or("");

    let mut inputs = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let id = ids[row].clone().unwrap_or_else(|| format!("row-{}", row + 1));
        let context = || format!("Assessment '{}' (row {})", id, row + 1);

        let age = number("age", row);
        let assessment = PatientAssessment {
            age: if age.is_finite() { age.round() as i32 } else { 0 },
            gender: parse_option(genders[row].as_deref().unwrap_or("")).with_context(context)?,
            weight: number("weight", row),
            height: number("height", row),
            mallampati: parse_option(text("mallampati", row)).with_context(context)?,
            tmd: number("tmd", row),
            inter_incisor_gap: number("inter_incisor_gap", row),
            neck_mobility: parse_option(text("neck_mobility", row)).with_context(context)?,
            jaw_protrusion: parse_option(text("jaw_protrusion", row)).with_context(context)?,
            ulbt: parse_option(text("ulbt", row)).with_context(context)?,
            osa: parse_option(text("osa", row)).with_context(context)?,
            arthritis: parse_option(text("arthritis", row)).with_context(context)?,
            radiation_history: parse_option(text("radiation_history", row)).with_context(context)?,
            previous_difficulty: parse_option(text("previous_difficulty", row)).with_context(context)?,
        };

        inputs.push(BatchInput { id, assessment });
    }

    let blank = inputs.iter().filter(|i| i.assessment.is_blank()).count();
    if blank > 0 {
        tracing::warn!("{} assessment row(s) have no findings and will score 0", blank);
    }

    Ok(inputs)
}

fn parse_option<T>(value: &str) -> std::result::Result<T, AssessmentError>
where
    T: FromStr<Err = AssessmentError>,
{
    value.parse()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let raw = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;
    let column = raw
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", name))?;
    let values = column
        .f64()
        .with_context(|| format!("Column '{}' is not Float64", name))?;

    // Non-strict cast turns unparseable text into null; only blank cells may be null
    if values.null_count() > raw.null_count() {
        let text = raw
            .cast(&DataType::String)
            .with_context(|| format!("Column '{}' cannot be read as text", name))?;
        let cells = text
            .str()
            .with_context(|| format!("Column '{}' is not string type", name))?;
        for (row, (value, cell)) in values.into_iter().zip(cells.into_iter()).enumerate() {
            if let (None, Some(cell)) = (value, cell) {
                if !cell.trim().is_empty() {
                    return Err(anyhow!(
                        "Column '{}' (row {}): '{}' is not a number",
                        name,
                        row + 1,
                        cell
                    ));
                }
            }
        }
    }

    Ok(values.into_iter().collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' cannot be read as text", name))?;
    let values = column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?;
    Ok(values.into_iter().map(|v| v.map(|s| s.to_string())).collect())
}

/// Score all inputs in parallel, preserving input order
pub fn score_batch(inputs: &[BatchInput]) -> Vec<BatchRow> {
    let rows: Vec<BatchRow> = inputs
        .par_iter()
        .map(|input| BatchRow {
            id: input.id.clone(),
            result: RiskEngine::compute(&input.assessment),
        })
        .collect();

    let tally = tier_counts(&rows);
    tracing::info!(
        "Scored {} assessments: low={}, moderate={}, high={}, capped={}",
        rows.len(),
        tally.get(&RiskTier::Low).copied().unwrap_or(0),
        tally.get(&RiskTier::Moderate).copied().unwrap_or(0),
        tally.get(&RiskTier::High).copied().unwrap_or(0),
        capped_count(&rows),
    );

    rows
}

/// Rows whose uncapped total exceeded the maximum score
pub fn capped_count(rows: &[BatchRow]) -> usize {
    rows.iter()
        .filter(|r| r.result.raw_total() > MAX_SCORE)
        .count()
}

/// Number of rows per risk tier
pub fn tier_counts(rows: &[BatchRow]) -> FxHashMap<RiskTier, usize> {
    let mut counts = FxHashMap::default();
    for row in rows {
        *counts.entry(row.result.tier()).or_insert(0) += 1;
    }
    counts
}

/// Build the results table
pub fn results_frame(rows: &[BatchRow]) -> Result<DataFrame> {
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    let scores: Vec<u32> = rows.iter().map(|r| r.result.score).collect();
    let tiers: Vec<&str> = rows.iter().map(|r| r.result.tier().label()).collect();
    let warnings: Vec<bool> = rows.iter().map(|r| r.result.plan().high_risk_warning).collect();
    let n_contributors: Vec<u32> = rows
        .iter()
        .map(|r| r.result.contributors.len() as u32)
        .collect();
    let top_factors: Vec<Option<&str>> = rows.iter().map(|r| r.top_factor()).collect();

    let df = df! {
        "id" => ids,
        "score" => scores,
        "tier" => tiers,
        "high_risk_warning" => warnings,
        "n_contributors" => n_contributors,
        "top_factor" => top_factors,
    }
    .with_context(|| "Failed to build results table")?;

    Ok(df)
}

/// Write scored rows to a CSV file
pub fn write_results(path: &Path, rows: &[BatchRow]) -> Result<()> {
    let mut df = results_frame(rows)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create results file: {:?}", path))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write results CSV: {:?}", path))?;

    tracing::info!("Wrote {} results to {:?}", rows.len(), path);
    Ok(())
}
