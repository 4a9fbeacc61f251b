pub mod dto {
    pub mod common;
    pub mod team;
}

pub mod error;
pub mod team_settings;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use dto::{
    common::ErrorResponse,
    team::{TeamDto, TeamFormValues, UpdateTeamRequest},
};

pub use team_settings::{
    BannerState, TeamSettingsController, TeamUpdateClient, UpdateNotifier, UpdateOutcome,
    TEAM_UPDATED_MESSAGE,
};
