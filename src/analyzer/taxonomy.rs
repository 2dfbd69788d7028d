use serde::{Deserialize, Serialize};

/// Service domains a grievance can be classified into.
///
/// The variant order is the declared table order and doubles as the
/// tie-break rule during category detection: an earlier category keeps
/// the lead over a later category with an equal match count. Changing
/// this order changes classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Healthcare,
    Education,
    #[serde(rename = "Water Supply")]
    WaterSupply,
    #[serde(rename = "Roads & Transport")]
    RoadsTransport,
    Electricity,
    Sanitation,
}

impl Category {
    /// Get the display name used in results and explanations
    pub fn name(&self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::WaterSupply => "Water Supply",
            Category::RoadsTransport => "Roads & Transport",
            Category::Electricity => "Electricity",
            Category::Sanitation => "Sanitation",
        }
    }

    /// All known categories in declared (tie-break) order
    pub fn all() -> [Category; 6] {
        [
            Category::Healthcare,
            Category::Education,
            Category::WaterSupply,
            Category::RoadsTransport,
            Category::Electricity,
            Category::Sanitation,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Urgency tier assigned to a grievance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
