use serde::{Deserialize, Serialize};

use crate::error::{GrievanceError, GrievanceResult};
use crate::utils::string_utils::StringUtils;

/// Minimum trimmed title length accepted at intake
pub const MIN_TITLE_LENGTH: usize = 5;

/// Minimum trimmed description length accepted at intake
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// A citizen submission as received by the intake layer.
///
/// The engine itself only sees one text blob; this type captures how
/// the surrounding system composes it: description first, then title,
/// separated by a single space. The order affects keyword position but
/// not matching, since matching is substring-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrievanceSubmission {
    pub title: String,
    pub description: String,
}

impl GrievanceSubmission {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Validate the intake-level length requirements
    pub fn validate(&self) -> GrievanceResult<()> {
        if StringUtils::trimmed_length(&self.title) < MIN_TITLE_LENGTH {
            return Err(GrievanceError::invalid_input(format!(
                "title must be at least {} characters",
                MIN_TITLE_LENGTH
            )));
        }
        if StringUtils::trimmed_length(&self.description) < MIN_DESCRIPTION_LENGTH {
            return Err(GrievanceError::invalid_input(format!(
                "description must be at least {} characters",
                MIN_DESCRIPTION_LENGTH
            )));
        }
        Ok(())
    }

    /// The text blob passed to the analyzer
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.description, self.title)
    }
}
