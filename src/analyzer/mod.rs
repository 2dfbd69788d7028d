use tracing::debug;

pub mod result;
pub mod taxonomy;

use crate::config::AnalyzerConfig;
use crate::error::{GrievanceError, GrievanceResult};
use self::result::{AnalysisExplanation, AnalysisResult, CategoryMatch};
use self::taxonomy::Priority;

/// Minimum trimmed input length accepted by [`GrievanceAnalyzer::analyze`]
pub const MIN_TEXT_LENGTH: usize = 5;

/// Category reported when no keyword table matches
pub const GENERAL_CATEGORY: &str = "General";

/// Scheme list returned for categories without a curated entry
pub const DEFAULT_SCHEME: &str = "General Welfare Schemes";

/// Match count at which confidence saturates at 1.0
const MATCH_SATURATION: f64 = 3.0;

/// Deterministic, explainable, stateless grievance classifier.
///
/// Holds three immutable knowledge tables (category keywords, priority
/// keywords, category-to-scheme mapping) loaded at construction and
/// never mutated afterwards. Build one at startup and share it; every
/// call to [`analyze`](Self::analyze) allocates only local state, so
/// concurrent use needs no synchronization.
///
/// Keyword detection is raw substring containment against the
/// lowercased text, not word-boundary matching: "class" matches inside
/// "classic". This is a known, intentional quirk kept for
/// compatibility with existing classifications.
#[derive(Debug, Clone)]
pub struct GrievanceAnalyzer {
    config: AnalyzerConfig,
}

impl GrievanceAnalyzer {
    /// Create an analyzer from validated knowledge tables
    pub fn new(config: AnalyzerConfig) -> GrievanceResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyze grievance text into a category, priority, scheme list,
    /// confidence score, and explanation.
    ///
    /// The only failure mode is input validation: text shorter than
    /// [`MIN_TEXT_LENGTH`] characters after trimming. Text matching no
    /// keyword at all still succeeds, with category "General",
    /// priority Medium, and confidence 0.0.
    pub fn analyze(&self, text: &str) -> GrievanceResult<AnalysisResult> {
        if text.trim().chars().count() < MIN_TEXT_LENGTH {
            return Err(GrievanceError::invalid_input(format!(
                "grievance text must be at least {} characters",
                MIN_TEXT_LENGTH
            )));
        }

        let normalized = text.to_lowercase();

        // Category detection: scan tables in declared order, keeping
        // the first category to reach the highest count. Only a
        // strictly greater count replaces the leader, so earlier
        // categories win ties.
        let mut leader: Option<usize> = None;
        let mut max_matches = 0usize;
        let mut hit_counts = Vec::with_capacity(self.config.categories.len());

        for (index, rule) in self.config.categories.iter().enumerate() {
            let matches = rule
                .keywords
                .iter()
                .filter(|keyword| normalized.contains(keyword.as_str()))
                .count();
            hit_counts.push(CategoryMatch {
                category: rule.category.name().to_string(),
                matches: matches as u32,
            });
            if matches > max_matches {
                max_matches = matches;
                leader = Some(index);
            }
        }

        // Confidence: capped keyword-match ratio, not a probability
        let confidence = if max_matches > 0 {
            (max_matches as f64 / MATCH_SATURATION).min(1.0)
        } else {
            0.0
        };
        let confidence_score = (confidence * 100.0).round() / 100.0;
        let confidence_percent = (confidence * 100.0).round() as u32;

        let (priority, priority_reason) = self.detect_priority(&normalized);

        let (category, suggested_schemes) = match leader {
            Some(index) => {
                let rule = &self.config.categories[index];
                let schemes = if rule.schemes.is_empty() {
                    vec![DEFAULT_SCHEME.to_string()]
                } else {
                    rule.schemes.clone()
                };
                (rule.category.name().to_string(), schemes)
            }
            None => (GENERAL_CATEGORY.to_string(), vec![DEFAULT_SCHEME.to_string()]),
        };

        let explanation = AnalysisExplanation {
            category_detection: format!(
                "Matched {} keyword(s) in '{}' category",
                max_matches, category
            ),
            confidence: format!("{}%", confidence_percent),
            priority_reason,
            relevant_keywords: hit_counts,
        };

        debug!(
            category = %category,
            priority = %priority,
            confidence = confidence_score,
            "grievance analyzed"
        );

        Ok(AnalysisResult {
            category,
            priority,
            suggested_schemes,
            confidence_score,
            explanation,
        })
    }

    /// High is checked first and wins outright when any High keyword
    /// is present; Low is only consulted when no High keyword matched.
    fn detect_priority(&self, normalized: &str) -> (Priority, String) {
        let high_hits: Vec<&str> = self
            .config
            .priority
            .high
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .map(String::as_str)
            .collect();

        if !high_hits.is_empty() {
            return (
                Priority::High,
                format!("High urgency keywords detected: {}", high_hits.join(", ")),
            );
        }

        if self
            .config
            .priority
            .low
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
        {
            return (
                Priority::Low,
                "Low urgency - marked as feedback or minor issue".to_string(),
            );
        }

        (Priority::Medium, "No urgent keywords detected".to_string())
    }

    /// The knowledge tables backing this analyzer
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for GrievanceAnalyzer {
    /// Analyzer over the built-in reference tables. The reference
    /// configuration always validates, so this cannot fail.
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryRule;
    use super::taxonomy::Category;

    fn analyzer() -> GrievanceAnalyzer {
        GrievanceAnalyzer::default()
    }

    #[test]
    fn test_water_supply_high_priority() {
        let result = analyzer()
            .analyze("No water supply for 3 days, urgent issue")
            .unwrap();

        assert_eq!(result.category, "Water Supply");
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.confidence_score, 0.67);
        assert!(result.suggested_schemes.contains(&"Jal Jeevan Mission".to_string()));
        assert_eq!(result.explanation.confidence, "67%");
        assert_eq!(
            result.explanation.priority_reason,
            "High urgency keywords detected: urgent"
        );
    }

    #[test]
    fn test_education_confidence_saturates() {
        // school, teacher, books, student(s) -> 4 matches, capped at 1.0
        let result = analyzer()
            .analyze("The school teacher suggested better books for students")
            .unwrap();

        assert_eq!(result.category, "Education");
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.confidence_score, 1.0);
        assert_eq!(result.explanation.confidence, "100%");
        assert_eq!(
            result.explanation.category_detection,
            "Matched 4 keyword(s) in 'Education' category"
        );
    }

    #[test]
    fn test_sanitation_low_priority() {
        let result = analyzer().analyze("Minor delay in garbage pickup").unwrap();

        assert_eq!(result.category, "Sanitation");
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.confidence_score, 0.33);
        assert_eq!(result.suggested_schemes, vec!["Swachh Bharat Mission".to_string()]);
        assert_eq!(
            result.explanation.priority_reason,
            "Low urgency - marked as feedback or minor issue"
        );
    }

    #[test]
    fn test_general_fallback() {
        let result = analyzer()
            .analyze("General comment about town services")
            .unwrap();

        assert_eq!(result.category, "General");
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.confidence_score, 0.0);
        assert_eq!(result.explanation.confidence, "0%");
        assert_eq!(result.suggested_schemes, vec![DEFAULT_SCHEME.to_string()]);
        assert!(result.explanation.relevant_keywords.iter().all(|m| m.matches == 0));
    }

    #[test]
    fn test_text_too_short() {
        let err = analyzer().analyze("Hi").unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_length_boundary() {
        // "water" is exactly 5 characters after trimming
        let result = analyzer().analyze("  water  ").unwrap();
        assert_eq!(result.category, "Water Supply");

        // 4 characters is rejected even when it is a valid keyword
        assert!(analyzer().analyze("road").is_err());
        assert!(analyzer().analyze("   abcd   ").is_err());
    }

    #[test]
    fn test_high_preempts_low() {
        let result = analyzer()
            .analyze("Minor issue but the broken wire is dangerous")
            .unwrap();

        assert_eq!(result.priority, Priority::High);
        // "danger" matches inside "dangerous"
        assert_eq!(
            result.explanation.priority_reason,
            "High urgency keywords detected: danger"
        );
    }

    #[test]
    fn test_high_keywords_listed_in_table_order() {
        let result = analyzer()
            .analyze("Emergency at the clinic, urgent help needed")
            .unwrap();

        // "urgent" precedes "emergency" in the declared High table
        assert_eq!(
            result.explanation.priority_reason,
            "High urgency keywords detected: urgent, emergency"
        );
    }

    #[test]
    fn test_tie_break_prefers_earlier_category() {
        // One keyword each for Healthcare and Education; Healthcare is
        // declared first and keeps the lead
        let result = analyzer()
            .analyze("visited the hospital near the school")
            .unwrap();

        assert_eq!(result.category, "Healthcare");
        assert_eq!(result.confidence_score, 0.33);
    }

    #[test]
    fn test_substring_matching_quirk() {
        // "class" matches inside "classic" by design
        let result = analyzer().analyze("a classic problem in our area").unwrap();
        assert_eq!(result.category, "Education");
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = analyzer().analyze("water water water everywhere").unwrap();
        assert_eq!(result.category, "Water Supply");
        assert_eq!(result.confidence_score, 0.33);
    }

    #[test]
    fn test_confidence_never_exceeds_one() {
        // Six distinct Education keywords, still capped at 1.0
        let result = analyzer()
            .analyze("school teacher class student books exam college education")
            .unwrap();
        assert_eq!(result.confidence_score, 1.0);
    }

    #[test]
    fn test_confidence_monotonicity() {
        let one = analyzer().analyze("the school is closed").unwrap();
        let two = analyzer().analyze("the school teacher is away").unwrap();
        let three = analyzer().analyze("the school teacher lost the books").unwrap();

        assert!(one.confidence_score < two.confidence_score);
        assert!(two.confidence_score < three.confidence_score);
        assert_eq!(three.confidence_score, 1.0);
    }

    #[test]
    fn test_determinism() {
        let text = "Power outage near the school, urgent repair needed";
        let first = analyzer().analyze(text).unwrap();
        let second = analyzer().analyze(text).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_hit_counts_cover_all_categories_in_order() {
        let result = analyzer().analyze("garbage on the street").unwrap();
        let names: Vec<&str> = result
            .explanation
            .relevant_keywords
            .iter()
            .map(|m| m.category.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "Healthcare",
                "Education",
                "Water Supply",
                "Roads & Transport",
                "Electricity",
                "Sanitation"
            ]
        );
    }

    #[test]
    fn test_empty_scheme_list_falls_back() {
        let config = AnalyzerConfig {
            categories: vec![CategoryRule {
                category: Category::RoadsTransport,
                keywords: vec!["pothole".to_string()],
                schemes: vec![],
            }],
            priority: AnalyzerConfig::default().priority,
        };
        let analyzer = GrievanceAnalyzer::new(config).unwrap();

        let result = analyzer.analyze("huge pothole on main road").unwrap();
        assert_eq!(result.category, "Roads & Transport");
        assert_eq!(result.suggested_schemes, vec![DEFAULT_SCHEME.to_string()]);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = AnalyzerConfig::default();
        config.categories[0].keywords.clear();
        assert!(GrievanceAnalyzer::new(config).is_err());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyzer().analyze("HOSPITAL STAFF UNAVAILABLE").unwrap();
        assert_eq!(result.category, "Healthcare");
    }
}
