//! Research record models matching the `/api/research` wire format.

use serde::{Deserialize, Serialize};

/// Research area a record belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Space,
    Quantum,
    Ai,
    Database,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Space,
        Category::Quantum,
        Category::Ai,
        Category::Database,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Space => "space",
            Category::Quantum => "quantum",
            Category::Ai => "ai",
            Category::Database => "database",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "space" => Some(Category::Space),
            "quantum" => Some(Category::Quantum),
            "ai" => Some(Category::Ai),
            "database" => Some(Category::Database),
            _ => None,
        }
    }

    /// Human-readable name shown in listings and the categories endpoint.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Space => "Space Research",
            Category::Quantum => "Quantum Theory",
            Category::Ai => "AI Programming",
            Category::Database => "Database Technology",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Space => "Space exploration and satellite technology",
            Category::Quantum => "Quantum computing and quantum mechanics",
            Category::Ai => "Artificial intelligence and machine learning",
            Category::Database => "Data management and analytics",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A research record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub findings: String,
    #[serde(default)]
    pub created_at: String,
}

/// A record without its server-assigned fields.
///
/// Request body for `POST /api/research`, and the client's draft buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewResearch {
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub findings: String,
}

/// Response body for `DELETE /api/research/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

/// One entry of `GET /api/research/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

impl CategoriesResponse {
    pub fn all() -> Self {
        Self {
            categories: Category::ALL
                .iter()
                .map(|c| CategoryInfo {
                    id: *c,
                    name: c.display_name().to_string(),
                    description: c.description().to_string(),
                })
                .collect(),
        }
    }
}

/// Record counts per category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub space: i64,
    pub quantum: i64,
    pub ai: i64,
    pub database: i64,
}

impl CategoryCounts {
    pub fn set(&mut self, category: Category, count: i64) {
        match category {
            Category::Space => self.space = count,
            Category::Quantum => self.quantum = count,
            Category::Ai => self.ai = count,
            Category::Database => self.database = count,
        }
    }
}

/// Response body for `GET /api/research/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchStats {
    pub total_research: i64,
    pub categories: CategoryCounts,
    pub last_updated: String,
}
