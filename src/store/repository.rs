//! Collection operations for the portal's domain data.
//!
//! Every mutation is a whole-collection read-modify-write through the record
//! store; there is no partial update of an individual record in place.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{AttendanceRecord, CommunityRequest, Member, Portfolio, Project, Resource};
use crate::seed;

use super::RecordStore;

/// Storage keys, one per collection or flag.
mod keys {
    pub const PROJECTS: &str = "niesat_projects";
    pub const MEMBERS: &str = "niesat_members";
    pub const RESOURCES: &str = "niesat_resources";
    pub const REQUESTS: &str = "niesat_requests";
    pub const ATTENDANCE: &str = "niesat_attendance";
    pub const DARK_MODE: &str = "niesat_dark_mode";
}

/// Repository over the record store for all portal collections.
#[derive(Clone)]
pub struct Repository {
    store: Arc<RecordStore>,
}

impl Repository {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    // ==================== PROJECT OPERATIONS ====================

    /// List all projects, falling back to the seed catalogue when nothing
    /// has been persisted yet.
    pub fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.store.read(keys::PROJECTS, seed::initial_projects())
    }

    /// Insert or replace a project by id. An existing id keeps its position
    /// in the collection; a new id is appended at the end. Callers assign
    /// ids before saving.
    pub fn save_project(&self, project: Project) -> Result<(), StoreError> {
        self.store
            .update(keys::PROJECTS, seed::initial_projects(), |projects| {
                match projects.iter().position(|p| p.id == project.id) {
                    Some(index) => projects[index] = project,
                    None => projects.push(project),
                }
            })
    }

    /// Delete a project by id. Deleting an absent id is a no-op.
    pub fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        self.store
            .update(keys::PROJECTS, seed::initial_projects(), |projects| {
                projects.retain(|p| p.id != id);
            })
    }

    // ==================== MEMBER OPERATIONS ====================

    /// List all members, falling back to the seed roster.
    pub fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        self.store.read(keys::MEMBERS, seed::initial_members())
    }

    /// Insert or replace a member by id, preserving the position of an
    /// existing record.
    pub fn save_member(&self, member: Member) -> Result<(), StoreError> {
        self.store
            .update(keys::MEMBERS, seed::initial_members(), |members| {
                match members.iter().position(|m| m.id == member.id) {
                    Some(index) => members[index] = member,
                    None => members.push(member),
                }
            })
    }

    /// Delete a member by id. Attendance records referencing the member are
    /// left untouched.
    pub fn delete_member(&self, id: &str) -> Result<(), StoreError> {
        self.store
            .update(keys::MEMBERS, seed::initial_members(), |members| {
                members.retain(|m| m.id != id);
            })
    }

    // ==================== RESOURCE OPERATIONS ====================

    /// List all resources, falling back to the seed library.
    pub fn list_resources(&self) -> Result<Vec<Resource>, StoreError> {
        self.store.read(keys::RESOURCES, seed::initial_resources())
    }

    /// Append a resource unconditionally. No de-duplication by id; the
    /// caller is responsible for id uniqueness.
    pub fn add_resource(&self, resource: Resource) -> Result<(), StoreError> {
        self.store
            .update(keys::RESOURCES, seed::initial_resources(), |resources| {
                resources.push(resource);
            })
    }

    // ==================== REQUEST OPERATIONS ====================

    /// List all community requests. Starts empty; there is no seed.
    pub fn list_requests(&self) -> Result<Vec<CommunityRequest>, StoreError> {
        self.store.read(keys::REQUESTS, Vec::new())
    }

    /// Append a community request. Append-only from the public side.
    pub fn add_request(&self, request: CommunityRequest) -> Result<(), StoreError> {
        self.store.update(keys::REQUESTS, Vec::new(), |requests| {
            requests.push(request);
        })
    }

    // ==================== ATTENDANCE OPERATIONS ====================

    /// List all attendance records.
    pub fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.store.read(keys::ATTENDANCE, Vec::new())
    }

    /// Append a batch of attendance records after the existing ones, as a
    /// single store round-trip.
    pub fn record_attendance(&self, records: Vec<AttendanceRecord>) -> Result<(), StoreError> {
        self.store.update(keys::ATTENDANCE, Vec::new(), |existing| {
            existing.extend(records);
        })
    }

    // ==================== PREFERENCE OPERATIONS ====================

    /// Read the dark-mode flag. Defaults to false when never set.
    pub fn dark_mode(&self) -> Result<bool, StoreError> {
        self.store.read(keys::DARK_MODE, false)
    }

    /// Store the dark-mode flag.
    pub fn set_dark_mode(&self, value: bool) -> Result<(), StoreError> {
        self.store.write(keys::DARK_MODE, &value)
    }

    /// Assemble every collection plus the preference flag into one snapshot.
    pub fn portfolio(&self) -> Result<Portfolio, StoreError> {
        Ok(Portfolio {
            projects: self.list_projects()?,
            members: self.list_members()?,
            resources: self.list_resources()?,
            requests: self.list_requests()?,
            attendance: self.list_attendance()?,
            dark_mode: self.dark_mode()?,
        })
    }
}
