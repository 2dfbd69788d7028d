use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

use crate::analyzer::taxonomy::Category;
use crate::error::{GrievanceError, GrievanceResult};
use crate::logging::LoggingConfig;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub analyzer: AnalyzerConfig,
    pub logging: LoggingConfig,
}

/// Knowledge tables driving the grievance analyzer.
///
/// The order of `categories` is the declared table order used for
/// tie-breaking during category detection and is preserved as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub categories: Vec<CategoryRule>,
    pub priority: PriorityKeywords,
}

/// One category's trigger keywords and suggested schemes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
    /// Curated scheme list in display order; empty resolves to the
    /// general welfare fallback at analysis time
    pub schemes: Vec<String>,
}

/// Urgency trigger keywords. Medium has no keyword set; it is the
/// fallback when neither High nor Low triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityKeywords {
    pub high: Vec<String>,
    pub low: Vec<String>,
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryRule {
                    category: Category::Healthcare,
                    keywords: words(&[
                        "hospital", "doctor", "nurse", "medicine", "health", "clinic",
                        "treatment", "ambulance",
                    ]),
                    schemes: words(&[
                        "Ayushman Bharat",
                        "Pradhan Mantri Jan Arogya Yojana (PMJAY)",
                        "National Health Mission",
                    ]),
                },
                CategoryRule {
                    category: Category::Education,
                    keywords: words(&[
                        "school", "teacher", "class", "student", "books", "education",
                        "college", "exam",
                    ]),
                    schemes: words(&[
                        "Sarva Shiksha Abhiyan",
                        "Mid-Day Meal Scheme",
                        "National Scholarship Portal",
                    ]),
                },
                CategoryRule {
                    category: Category::WaterSupply,
                    keywords: words(&[
                        "water", "leak", "pipe", "shortage", "dirty", "supply", "tank",
                    ]),
                    schemes: words(&["Jal Jeevan Mission", "Atal Bhujal Yojana"]),
                },
                CategoryRule {
                    category: Category::RoadsTransport,
                    keywords: words(&[
                        "road", "pothole", "bus", "traffic", "transport", "street", "bridge",
                    ]),
                    schemes: words(&["Pradhan Mantri Gram Sadak Yojana"]),
                },
                CategoryRule {
                    category: Category::Electricity,
                    keywords: words(&[
                        "power", "electricity", "outage", "voltage", "wire", "pole", "light",
                    ]),
                    schemes: words(&[
                        "Saubhagya Scheme",
                        "Deen Dayal Upadhyaya Gram Jyoti Yojana",
                    ]),
                },
                CategoryRule {
                    category: Category::Sanitation,
                    keywords: words(&[
                        "garbage", "trash", "waste", "clean", "drain", "sewage", "dustbin",
                    ]),
                    schemes: words(&["Swachh Bharat Mission"]),
                },
            ],
            priority: PriorityKeywords {
                high: words(&[
                    "urgent", "immediate", "emergency", "severe", "critical", "danger",
                    "hazard", "death", "accident",
                ]),
                low: words(&["minor", "suggestion", "feedback", "delay", "slow"]),
            },
        }
    }
}

impl AnalyzerConfig {
    /// Validate the knowledge tables
    pub fn validate(&self) -> GrievanceResult<()> {
        if self.categories.is_empty() {
            return Err(GrievanceError::config("at least one category must be configured"));
        }

        let mut seen = HashSet::new();
        for rule in &self.categories {
            if !seen.insert(rule.category) {
                return Err(GrievanceError::config(format!(
                    "duplicate entry for category '{}'",
                    rule.category
                )));
            }
            if rule.keywords.is_empty() {
                return Err(GrievanceError::config(format!(
                    "category '{}' has no keywords",
                    rule.category
                )));
            }
            Self::validate_keywords(&rule.keywords, rule.category.name())?;
        }

        Self::validate_keywords(&self.priority.high, "High priority")?;
        Self::validate_keywords(&self.priority.low, "Low priority")?;

        // High and Low keyword sets must be disjoint
        let high: HashSet<&str> = self.priority.high.iter().map(String::as_str).collect();
        if let Some(shared) = self.priority.low.iter().find(|kw| high.contains(kw.as_str())) {
            return Err(GrievanceError::config(format!(
                "keyword '{}' appears in both High and Low priority sets",
                shared
            )));
        }

        Ok(())
    }

    /// Matching is done against lowercased text, so the tables must be
    /// lowercase to begin with
    fn validate_keywords(keywords: &[String], table: &str) -> GrievanceResult<()> {
        for keyword in keywords {
            if keyword.trim().is_empty() {
                return Err(GrievanceError::config(format!("{} table contains a blank keyword", table)));
            }
            if *keyword != keyword.to_lowercase() {
                return Err(GrievanceError::config(format!(
                    "{} keyword '{}' must be lowercase",
                    table, keyword
                )));
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to
    /// the built-in reference tables when no file exists
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            info!("No configuration file found, using built-in reference tables");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;

        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.analyzer.validate()?;
        Ok(())
    }
}

/// Get the configuration file path
fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("org", "grievance", "engine")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("config.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut AppConfig) {
        if let Ok(log_level) = std::env::var("GRIEVANCE_LOG_LEVEL") {
            config.logging.level = log_level;
        }
    }
}
