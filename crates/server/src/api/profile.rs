//! # Profile API
//!
//! Serves the owner profile backing the Home, About, and Contact pages.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use portfolio_core::profile::Profile;

use crate::SharedState;

#[derive(Serialize, ToSchema)]
pub struct SkillGroupResponse {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TimelineEntryResponse {
    pub year: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

#[derive(Serialize, ToSchema)]
pub struct SocialLinkResponse {
    pub label: String,
    pub url: String,
}

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub skills: Vec<SkillGroupResponse>,
    pub tech_stack: Vec<String>,
    pub timeline: Vec<TimelineEntryResponse>,
    pub interests: Vec<String>,
    pub social_links: Vec<SocialLinkResponse>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            headline: profile.headline.clone(),
            tagline: profile.tagline.clone(),
            bio: profile.bio.clone(),
            skills: profile
                .skills
                .iter()
                .map(|g| SkillGroupResponse {
                    category: g.category.clone(),
                    items: g.items.clone(),
                })
                .collect(),
            tech_stack: profile.tech_stack.clone(),
            timeline: profile
                .timeline
                .iter()
                .map(|t| TimelineEntryResponse {
                    year: t.year.clone(),
                    title: t.title.clone(),
                    organization: t.organization.clone(),
                    description: t.description.clone(),
                })
                .collect(),
            interests: profile.interests.clone(),
            social_links: profile
                .social_links
                .iter()
                .map(|s| SocialLinkResponse {
                    label: s.label.clone(),
                    url: s.url.clone(),
                })
                .collect(),
        }
    }
}

pub fn profile_routes() -> Router<SharedState> {
    Router::new().route("/", get(get_profile))
}

/// Fetch the owner profile
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Owner profile", body = ProfileResponse)
    )
)]
pub async fn get_profile(State(state): State<SharedState>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&state.profile))
}
