mod errors;
mod projection_service;

pub use errors::ProjectionError;
pub use projection_service::{GoalEstimate, ProjectionService};
