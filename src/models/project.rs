//! Project model and the shared sector enumeration.

use serde::{Deserialize, Serialize};

/// Sector a project falls under. Community requests use the same set.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Schools,
    Water,
    ICT,
    Power,
    Environment,
}

/// A completed or ongoing chapter project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display string, e.g. "March 2024".
    pub date: String,
    pub location: String,
    pub image_url: String,
    pub category: Category,
}
