use serde::{Deserialize, Serialize};

/// A candidate service from the portal catalog
///
/// The client sends the full candidate set with every match request; ids are
/// unique within a batch and the server never invents new ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-text classification labels, comma-separated
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ServiceItem {
    /// Lowercased text searched by the local substring fallback
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.description,
            self.category,
            self.tags.join(" ")
        )
        .to_lowercase()
    }

    /// Lowercased category/tag text checked by the vehicle override rule
    pub fn vehicle_text(&self) -> String {
        format!("{} {}", self.category, self.tags.join(" ")).to_lowercase()
    }
}
