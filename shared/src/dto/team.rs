use serde::{Deserialize, Serialize};

/// Data Transfer Object for a team as returned by `GET /api/teams/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    /// URL-safe short identifier, rendered after `{website}/team/`
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub bio: String,
    /// Image reference (usually a data URL). `None` or empty means no logo.
    #[serde(default)]
    pub logo: Option<String>,
    /// Hide the product's own branding on the team's public pages
    #[serde(default)]
    pub hide_branding: bool,
}

impl TeamDto {
    pub fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|logo| !logo.is_empty())
    }
}

/// Values currently held by the settings form inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamFormValues {
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub hide_branding: bool,
}

impl From<&TeamDto> for TeamFormValues {
    fn from(team: &TeamDto) -> Self {
        Self {
            name: team.name.clone(),
            slug: team.slug.clone(),
            bio: team.bio.clone(),
            hide_branding: team.hide_branding,
        }
    }
}

/// Partial update sent to `PATCH /api/teams/{id}`.
///
/// Absent fields are left out of the JSON body entirely, so the server only
/// touches what the user actually changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_branding: Option<bool>,
}

fn changed<T: PartialEq + Clone>(current: &T, edited: &T) -> Option<T> {
    (current != edited).then(|| edited.clone())
}

impl UpdateTeamRequest {
    /// Builds a request holding only the form values that differ from `team`
    pub fn from_changes(team: &TeamDto, form: &TeamFormValues) -> Self {
        Self {
            id: team.id.clone(),
            name: changed(&team.name, &form.name),
            slug: changed(&team.slug, &form.slug),
            bio: changed(&team.bio, &form.bio),
            logo: None,
            hide_branding: changed(&team.hide_branding, &form.hide_branding),
        }
    }

    /// Builds a logo-only request. An empty `logo` clears the current one.
    pub fn logo(team_id: &str, logo: &str) -> Self {
        Self {
            id: team_id.to_string(),
            logo: Some(logo.to_string()),
            ..Default::default()
        }
    }

    /// Wire names of the fields this request will change
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.slug.is_some() {
            fields.push("slug");
        }
        if self.bio.is_some() {
            fields.push("bio");
        }
        if self.logo.is_some() {
            fields.push("logo");
        }
        if self.hide_branding.is_some() {
            fields.push("hideBranding");
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Applies the request to a record, the way the server would
    pub fn apply_to(&self, team: &mut TeamDto) {
        if let Some(name) = &self.name {
            team.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            team.slug = slug.clone();
        }
        if let Some(bio) = &self.bio {
            team.bio = bio.clone();
        }
        if let Some(logo) = &self.logo {
            team.logo = if logo.is_empty() { None } else { Some(logo.clone()) };
        }
        if let Some(hide_branding) = self.hide_branding {
            team.hide_branding = hide_branding;
        }
    }
}
