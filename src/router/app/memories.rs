use axum::{extract::State, response::Html, Form};

use serde::{Deserialize, Serialize};
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{markdown, render_page, Page},
};
use crate::{data::model::NewInteraction, AppState};

#[derive(Deserialize, Debug)]
pub struct ShareStory {
    user_id: String,
    story: String,
}

#[derive(Serialize)]
struct CommunityStory {
    user_id: String,
    story_html: String,
}

pub async fn personal_memories(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, false).await
}

pub async fn share_story(
    State(state): State<Arc<AppState>>,
    Form(share): Form<ShareStory>,
) -> Result<Html<String>, AppError> {
    state
        .interactions
        .record(&NewInteraction::Story {
            user_id: share.user_id,
            message: share.story,
        })
        .await?;

    render(&state, true).await
}

async fn render(state: &AppState, shared: bool) -> Result<Html<String>, AppError> {
    let community = state
        .interactions
        .fetch_user_stories()
        .await?
        .into_iter()
        .map(|s| CommunityStory {
            story_html: markdown(&format!("**User {}:** {}", s.user_id, s.message)),
            user_id: s.user_id,
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("shared", &shared);
    context.insert("community", &community);

    render_page(&state.tera, Page::PersonalMemories, "views/memories.html", &context)
}
