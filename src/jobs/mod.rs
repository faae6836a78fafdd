//! Job Card Data Model
//!
//! Serde model for the job cards the deck serves. Field names follow the
//! camelCase wire format of the SwipeHire feed API.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A job posting shown on a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque identity; the engine never interprets it
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub rating: f64,
    pub location: String,
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    pub posted_ago: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub full_description: JobDescription,
    pub apply_url: String,
}

/// Salary attached to a posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub amount: u64,
    pub currency: String,
    pub unit: SalaryUnit,
}

/// Pay period of a salary figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryUnit {
    Month,
    Year,
    Hour,
}

/// Long-form description shown in the details modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub category: String,
    pub stipend: String,
    pub duration: String,
    pub work_mode: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl Salary {
    /// Human-readable salary, e.g. `INR 50000/month`
    pub fn format(&self) -> String {
        let unit = match self.unit {
            SalaryUnit::Month => "month",
            SalaryUnit::Year => "year",
            SalaryUnit::Hour => "hour",
        };
        format!("{} {}/{}", self.currency, self.amount, unit)
    }
}

impl Job {
    /// Initials shown when a company has no logo: first letters of the first
    /// two words, uppercased.
    pub fn company_initials(&self) -> String {
        self.company
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Load a job feed from a JSON array file
pub fn load_feed(path: &Path) -> crate::Result<Vec<Job>> {
    let content = std::fs::read_to_string(path)?;
    let jobs: Vec<Job> = serde_json::from_str(&content)?;
    Ok(jobs)
}
