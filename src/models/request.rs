//! Community request model for the public contact form.

use serde::{Deserialize, Serialize};

use super::Category;

/// A project need submitted from the public site. Append-only; requests are
/// reviewed and cleared through the staff dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRequest {
    pub id: String,
    pub requester_name: String,
    pub contact: String,
    pub location: String,
    pub category: Category,
    pub description: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

/// Request body for submitting a community request; the server assigns the
/// id and timestamp before appending.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommunityRequest {
    pub requester_name: String,
    pub contact: String,
    pub location: String,
    pub category: Category,
    pub description: String,
}
