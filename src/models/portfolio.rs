//! Portfolio aggregate served to the staff dashboard.

use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, CommunityRequest, Member, Project, Resource};

/// Full snapshot of every collection plus the preference flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub projects: Vec<Project>,
    pub members: Vec<Member>,
    pub resources: Vec<Resource>,
    pub requests: Vec<CommunityRequest>,
    pub attendance: Vec<AttendanceRecord>,
    pub dark_mode: bool,
}
