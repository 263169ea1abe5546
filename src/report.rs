//! Explanation assembly and terminal rendering

use crate::segments::{lookup, SegmentProfile};

/// Display content for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub headline: String,
    pub description: String,
    pub justification: String,
    pub strategies: Vec<String>,
}

/// Build the display content for a predicted cluster.
///
/// The justification quotes the segment's centroid income/spend alongside
/// the customer's own values. It is descriptive text for the reader, not a
/// machine-checkable account of the assignment.
pub fn explain(cluster: usize, income: f64, score: f64) -> crate::Result<Explanation> {
    let profile = lookup(cluster)?;

    Ok(Explanation {
        headline: format!("Predicted Segment: {}", profile.name),
        description: profile.description.to_string(),
        justification: justification(profile, income, score),
        strategies: profile.strategies.iter().map(|s| s.to_string()).collect(),
    })
}

fn justification(profile: &SegmentProfile, income: f64, score: f64) -> String {
    format!(
        "This segment's average income is about {}k$ with an average spending score of {}. \
         The customer's income of {}k$ and spending score of {} sit closest to that profile, \
         so the model assigns them here.",
        profile.centroid_income, profile.centroid_spend, income, score
    )
}

/// Print a prediction report in the standard terminal layout.
pub fn print_report(explanation: &Explanation) {
    println!("\n=== {} ===", explanation.headline);
    println!("{}", explanation.description);

    println!("\nWhy this customer lands here:");
    println!("{}", explanation.justification);

    println!("\nRecommended business strategies:");
    for strategy in &explanation.strategies {
        println!("  - {}", strategy);
    }
}
