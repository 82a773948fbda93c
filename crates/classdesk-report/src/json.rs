//! JSON export of a class listing.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use classdesk_core::engine::Listing;
use classdesk_core::model::{Grade, Student};
use classdesk_core::statistics::Summary;

/// A complete export of one listing.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Where the records were read from.
    pub source: String,
    pub summary: Summary,
    pub students: Vec<StudentRow>,
}

/// Flattened view of one record.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRow {
    pub code: i64,
    pub name: String,
    pub component_marks: [i64; 3],
    pub exam_mark: i64,
    pub coursework_total: i64,
    pub aggregate_score: i64,
    pub percentage: f64,
    pub grade: Grade,
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            code: s.code(),
            name: s.name().to_string(),
            component_marks: s.component_marks(),
            exam_mark: s.exam_mark(),
            coursework_total: s.coursework_total(),
            aggregate_score: s.aggregate_score(),
            percentage: s.percentage(),
            grade: s.grade(),
        }
    }
}

impl ClassReport {
    pub fn new(listing: &Listing<'_>, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: source.into(),
            summary: listing.summary,
            students: listing.students.iter().map(StudentRow::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
