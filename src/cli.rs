//! Command-line interface definitions and argument parsing

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Customer segment predictor using a pre-trained K-Means model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Annual income in thousands of dollars (recommended range 10-140)
    #[arg(short, long, value_parser = parse_finite)]
    pub income: f64,

    /// Spending score (recommended range 1-100)
    #[arg(short, long, value_parser = parse_finite)]
    pub score: f64,

    /// Customer age, shown for reference only
    #[arg(long)]
    pub age: Option<u8>,

    /// Customer gender, shown for reference only
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Directory holding scaler.json and kmeans_model.json
    #[arg(long)]
    pub artifacts: Option<PathBuf>,

    /// Write a segment map PNG to this path
    #[arg(short, long)]
    pub plot: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Reference-only attribute, never used in clustering
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Accept any finite number; NaN and infinities are rejected at the CLI
/// boundary so they never reach the model.
fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("not a number: {raw}"))?;
    if !value.is_finite() {
        return Err(format!("value must be finite, got {raw}"));
    }
    Ok(value)
}

impl Args {
    /// Advisory notes for inputs outside the ranges the model saw during
    /// training. Advisory only: such inputs are still predicted.
    pub fn range_advisories(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if !(10.0..=140.0).contains(&self.income) {
            notes.push(format!(
                "income {} is outside the usual 10-140k$ range",
                self.income
            ));
        }
        if !(1.0..=100.0).contains(&self.score) {
            notes.push(format!(
                "spending score {} is outside the usual 1-100 range",
                self.score
            ));
        }
        notes
    }

    /// Reference-only customer details, when any were provided.
    pub fn profile_line(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(age) = self.age {
            parts.push(format!("age {age}"));
        }
        if let Some(gender) = self.gender {
            parts.push(format!("gender {gender}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
