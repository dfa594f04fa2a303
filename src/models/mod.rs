//! Data models for the portal backend.
//!
//! These models match the stored JSON shapes exactly, so records written by
//! earlier deployments keep decoding.

mod attendance;
mod member;
mod portfolio;
mod preference;
mod project;
mod request;
mod resource;

pub use attendance::*;
pub use member::*;
pub use portfolio::*;
pub use preference::*;
pub use project::*;
pub use request::*;
pub use resource::*;
