//! Diff-and-submit flow behind the team settings form.
//!
//! The controller is independent of the UI: it talks to the update endpoint
//! through [`TeamUpdateClient`] and reports results through
//! [`UpdateNotifier`], so the browser build and the tests plug in their own.

use async_trait::async_trait;
use log::{debug, warn};

use crate::dto::team::{TeamDto, TeamFormValues, UpdateTeamRequest};
use crate::error::Result;

/// Toast text shown after every successful update
pub const TEAM_UPDATED_MESSAGE: &str = "Your team has been updated successfully.";

/// Remote update endpoint for teams
#[async_trait(?Send)]
pub trait TeamUpdateClient {
    async fn update_team(&self, request: &UpdateTeamRequest) -> Result<()>;
}

/// Receives the result of each resolved update
pub trait UpdateNotifier {
    /// Called once per successful update. Implementations refresh the cached
    /// record and show the success toast.
    fn team_updated(&self, team_id: &str);
    fn update_failed(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated { team_id: String },
    Failed(String),
}

/// Inline error banner above the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BannerState {
    pub has_errors: bool,
    pub error_message: String,
}

impl BannerState {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            has_errors: true,
            error_message: message.into(),
        }
    }
}

impl From<&UpdateOutcome> for BannerState {
    fn from(outcome: &UpdateOutcome) -> Self {
        match outcome {
            UpdateOutcome::Updated { .. } => Self::clean(),
            UpdateOutcome::Failed(message) => Self::failed(message.clone()),
        }
    }
}

pub struct TeamSettingsController<C, N> {
    client: C,
    notifier: N,
}

impl<C, N> TeamSettingsController<C, N>
where
    C: TeamUpdateClient,
    N: UpdateNotifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// Sends the fields of `form` that differ from `team`.
    ///
    /// Returns `None` without contacting the server when no team is loaded.
    /// Anything else sends exactly one request, id-only when nothing changed.
    pub async fn submit(&self, team: Option<&TeamDto>, form: &TeamFormValues) -> Option<UpdateOutcome> {
        let Some(team) = team else {
            debug!("Ignoring team settings submit: no team loaded");
            return None;
        };

        let request = UpdateTeamRequest::from_changes(team, form);
        debug!("Submitting team {} with changed fields {:?}", team.id, request.changed_fields());
        Some(self.send(request).await)
    }

    /// Sends the logo on its own, bypassing the form diff
    pub async fn update_logo(&self, team: Option<&TeamDto>, logo: &str) -> Option<UpdateOutcome> {
        let Some(team) = team else {
            debug!("Ignoring logo update: no team loaded");
            return None;
        };

        debug!("Updating logo for team {} (clearing: {})", team.id, logo.is_empty());
        Some(self.send(UpdateTeamRequest::logo(&team.id, logo)).await)
    }

    pub async fn remove_logo(&self, team: Option<&TeamDto>) -> Option<UpdateOutcome> {
        self.update_logo(team, "").await
    }

    async fn send(&self, request: UpdateTeamRequest) -> UpdateOutcome {
        match self.client.update_team(&request).await {
            Ok(()) => {
                debug!("Team {} updated", request.id);
                self.notifier.team_updated(&request.id);
                UpdateOutcome::Updated { team_id: request.id }
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Team update failed: {}", message);
                self.notifier.update_failed(&message);
                UpdateOutcome::Failed(message)
            }
        }
    }
}
