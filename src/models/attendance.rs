//! Attendance models for meeting records.

use serde::{Deserialize, Serialize};

/// Attendance status for one member at one meeting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
}

/// One member's attendance entry for one meeting date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: String,
    /// Logical reference to a member. Not checked against the roster, and
    /// deleting a member does not cascade here.
    pub member_id: String,
    pub status: AttendanceStatus,
}

/// Request body for recording a batch of attendance entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub records: Vec<AttendanceRecord>,
}
