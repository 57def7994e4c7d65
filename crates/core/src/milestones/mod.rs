//! Milestones module - domain models and traits.

mod milestones_model;
mod milestones_traits;

pub use milestones_model::{Milestone, NewMilestone};
pub use milestones_traits::MilestoneRepositoryTrait;
