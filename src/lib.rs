pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FixedClock, InMemoryProfileRepository, LocalStorage, SystemClock};
pub use config::{toml_config::TrackerConfig, Settings};
pub use core::calculator::compute_gestational_state;
pub use core::milestones::{lookup_milestone, MilestoneTable};
pub use core::service::{AccountService, Dashboard, PregnancyOverview, TrackerService};
pub use domain::model::{DevelopmentalMilestone, GestationalState, PregnancyAnchor, Role, Trimester};
pub use utils::error::{Result, TrackerError};
