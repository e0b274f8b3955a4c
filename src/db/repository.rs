//! Database repository for research records.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Category, CategoryCounts, NewResearch, ResearchRecord};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all records in insertion order.
    pub async fn list_research(&self) -> Result<Vec<ResearchRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, category, description, findings, created_at FROM research ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().filter_map(research_from_row).collect())
    }

    /// Create a new record with a fresh identifier and timestamp.
    pub async fn create_research(&self, request: &NewResearch) -> Result<ResearchRecord, AppError> {
        let record = ResearchRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title.clone(),
            category: request.category,
            description: request.description.clone(),
            findings: request.findings.clone(),
            created_at: Utc::now().to_rfc3339(),
        };

        self.insert(&record).await?;
        Ok(record)
    }

    /// Delete a record.
    pub async fn delete_research(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM research WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Research item not found".to_string()));
        }

        Ok(())
    }

    /// Total number of records.
    pub async fn count_research(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM research")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }

    /// Number of records per category; categories without records count zero.
    pub async fn count_by_category(&self) -> Result<CategoryCounts, AppError> {
        let rows = sqlx::query("SELECT category, COUNT(*) AS total FROM research GROUP BY category")
            .fetch_all(&self.pool)
            .await?;

        let mut counts = CategoryCounts::default();
        for row in rows {
            let category: String = row.get("category");
            if let Some(category) = Category::parse(&category) {
                counts.set(category, row.get("total"));
            }
        }
        Ok(counts)
    }

    /// Insert the sample records when the table is empty. Returns how many were inserted.
    pub async fn seed_samples(&self) -> Result<usize, AppError> {
        if self.count_research().await? > 0 {
            return Ok(0);
        }

        let samples = sample_research();
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().to_rfc3339();
        for sample in &samples {
            sqlx::query(
                "INSERT INTO research (id, title, category, description, findings, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(&sample.title)
            .bind(sample.category.as_str())
            .bind(&sample.description)
            .bind(&sample.findings)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(samples.len())
    }

    async fn insert(&self, record: &ResearchRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO research (id, title, category, description, findings, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(record.category.as_str())
        .bind(&record.description)
        .bind(&record.findings)
        .bind(&record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

// Rows with a category outside the known set are skipped rather than failing the whole listing.
fn research_from_row(row: &sqlx::sqlite::SqliteRow) -> Option<ResearchRecord> {
    let category: String = row.get("category");
    let Some(category) = Category::parse(&category) else {
        tracing::warn!("Skipping research row with unknown category {:?}", category);
        return None;
    };

    Some(ResearchRecord {
        id: row.get("id"),
        title: row.get("title"),
        category,
        description: row.get("description"),
        findings: row.get("findings"),
        created_at: row.get("created_at"),
    })
}

/// One sample record per category, inserted into a fresh database.
fn sample_research() -> Vec<NewResearch> {
    vec![
        NewResearch {
            title: "Mars Rover Autonomous Navigation System".to_string(),
            category: Category::Space,
            description: "Development of advanced AI-driven navigation systems for Mars exploration rovers, enabling autonomous decision-making in challenging terrain.".to_string(),
            findings: "Successfully implemented machine learning algorithms that improved navigation accuracy by 85% and reduced mission planning time by 60%.".to_string(),
        },
        NewResearch {
            title: "Quantum Entanglement Communication Protocol".to_string(),
            category: Category::Quantum,
            description: "Research into quantum entanglement-based communication systems for secure space-to-Earth data transmission.".to_string(),
            findings: "Achieved quantum entanglement stability over 1000km distance with 99.9% fidelity, opening possibilities for unhackable space communications.".to_string(),
        },
        NewResearch {
            title: "AI-Powered Astronomical Data Analysis".to_string(),
            category: Category::Ai,
            description: "Machine learning models for automated detection and classification of celestial objects from telescope data.".to_string(),
            findings: "Developed neural networks that can identify exoplanets with 95% accuracy, processing 1000x faster than traditional methods.".to_string(),
        },
        NewResearch {
            title: "Distributed Space Mission Database Architecture".to_string(),
            category: Category::Database,
            description: "Scalable database systems for managing vast amounts of space mission data across multiple research institutions.".to_string(),
            findings: "Implemented blockchain-based data integrity system handling 10TB+ daily space mission data with real-time global synchronization.".to_string(),
        },
    ]
}
