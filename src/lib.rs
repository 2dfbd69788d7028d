//! Grievance Engine - explainable rule-based analysis of citizen grievances
//!
//! This library provides the core decision logic for a grievance intake
//! portal:
//! - keyword-table classification into fixed service categories
//! - High/Medium/Low urgency detection with High-over-Low precedence
//! - government scheme suggestions per category
//! - a confidence score and a structured, human-readable explanation
//!
//! The engine is a pure function over immutable knowledge tables: build
//! a [`GrievanceAnalyzer`] once at startup and call
//! [`analyze`](GrievanceAnalyzer::analyze) from any number of threads.
//! Persistence, HTTP routing, and presentation are left to the caller.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod utils;

// Re-export main types for convenience
pub use crate::analyzer::result::{AnalysisExplanation, AnalysisResult, CategoryMatch};
pub use crate::analyzer::taxonomy::{Category, Priority};
pub use crate::analyzer::GrievanceAnalyzer;
pub use crate::config::{AnalyzerConfig, AppConfig};
pub use crate::error::{GrievanceError, GrievanceResult};
pub use crate::intake::GrievanceSubmission;
