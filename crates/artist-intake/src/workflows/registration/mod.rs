//! Artist registration intake and manager review.
//!
//! Submissions pass through [`validation::validate`] before the
//! [`RegistrationService`] appends them to its [`ApplicationStore`]. Review actions
//! move records through the pending/approved/rejected lifecycle under a
//! [`TransitionPolicy`], and the dashboard reads filtered views and counts back out.

pub mod domain;
pub mod lifecycle;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationRecord, ApplicationStats, ApplicationStatus, ArtistProfile,
    Availability, Category, ExperienceLevel, FormOptions, Region, RegistrationSubmission, Skill,
};
pub use lifecycle::TransitionPolicy;
pub use router::registration_router;
pub use service::{RegistrationService, RegistrationServiceError};
pub use store::{ApplicationFilter, ApplicationStore, StoreError};
pub use validation::{validate, Field, ValidationError};
