//! Personal-finance ledger with balance projections and a small gamification layer.
//!
//! Data flows one way: [`ledger::Ledger`] holds transactions,
//! [`projection::ProjectionService`] extrapolates them, and
//! [`gamification::GamificationEngine`] reacts to the projected balance.

pub mod banking;
pub mod gamification;
pub mod import;
pub mod ledger;
pub mod models;
pub mod projection;
pub mod types;
pub mod users;
