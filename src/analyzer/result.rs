use serde::{Deserialize, Serialize};

use super::taxonomy::Priority;

/// Keyword hit count for a single category.
///
/// Kept as an ordered list entry rather than a hash map key so the
/// serialized explanation is byte-stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    pub matches: u32,
}

/// Human-readable justification attached to every classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisExplanation {
    /// e.g. "Matched 2 keyword(s) in 'Water Supply' category"
    pub category_detection: String,
    /// Confidence rendered as an integer percentage, e.g. "67%"
    pub confidence: String,
    /// Why the priority tier was chosen
    pub priority_reason: String,
    /// Keyword hit counts for every category, in declared table order
    pub relevant_keywords: Vec<CategoryMatch>,
}

/// Structured outcome of analyzing one grievance text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Display name of the winning category, or "General"
    pub category: String,
    pub priority: Priority,
    /// Never empty; falls back to the general welfare list
    pub suggested_schemes: Vec<String>,
    /// Capped keyword-match ratio in [0.0, 1.0], rounded to 2 decimals
    pub confidence_score: f64,
    pub explanation: AnalysisExplanation,
}
