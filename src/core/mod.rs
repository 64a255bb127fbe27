pub mod calculator;
pub mod growth;
pub mod milestones;
pub mod service;
pub mod timeline;

pub use crate::domain::model::{DevelopmentalMilestone, GestationalState, PregnancyAnchor};
pub use crate::domain::ports::{Clock, ConfigProvider, ProfileRepository, Storage};
pub use crate::utils::error::Result;
