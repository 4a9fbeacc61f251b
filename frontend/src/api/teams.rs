use crate::api::api_url;
use crate::api::cache::{cached_request, invalidate_cache_pattern};
use crate::api::utils::{authenticated_get, authenticated_patch, error_message};
use async_trait::async_trait;
use log::debug;
use shared::{SharedError, TeamDto, TeamUpdateClient, UpdateTeamRequest};

pub fn team_cache_key(team_id: &str) -> String {
    format!("teams:{}:", team_id)
}

fn team_url(team_id: &str) -> String {
    api_url(&format!("/api/teams/{}", urlencoding::encode(team_id)))
}

/// Fetches a team, served from the request cache while it is fresh
pub async fn get_team(team_id: &str) -> Result<TeamDto, String> {
    debug!("Fetching team {}", team_id);

    let url = team_url(team_id);
    let body = cached_request(&team_cache_key(team_id), move || async move {
        let response = authenticated_get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch team: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read team response: {}", e))
    })
    .await?;

    let team = serde_json::from_str::<TeamDto>(&body)
        .map_err(|e| format!("Failed to parse team response: {}", e))?;

    debug!("Loaded team {} ({})", team.id, team.slug);
    Ok(team)
}

/// Sends a partial update. Only fields present in `request` are serialized.
pub async fn update_team(request: &UpdateTeamRequest) -> Result<(), SharedError> {
    debug!("Updating team {}: {:?}", request.id, request.changed_fields());

    let response = authenticated_patch(&team_url(&request.id))
        .json(request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize team update: {}", e)))?
        .send()
        .await
        .map_err(|e| SharedError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SharedError::UpdateFailed(error_message(response).await));
    }

    Ok(())
}

/// Drops the cached record so the next `get_team` refetches it
pub fn invalidate_team(team_id: &str) {
    debug!("Invalidating cached team {}", team_id);
    invalidate_cache_pattern(&team_cache_key(team_id));
}

/// [`TeamUpdateClient`] backed by the HTTP API
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTeamClient;

#[async_trait(?Send)]
impl TeamUpdateClient for HttpTeamClient {
    async fn update_team(&self, request: &UpdateTeamRequest) -> shared::Result<()> {
        update_team(request).await
    }
}
