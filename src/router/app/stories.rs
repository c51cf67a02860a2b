use axum::{extract::State, response::Html};

use serde::Serialize;
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{markdown, render_page, Page},
};
use crate::AppState;

#[derive(Serialize)]
struct RenderedStory {
    title: String,
    story_html: String,
}

pub async fn real_stories(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let stories = state
        .stories
        .fetch_stories()
        .await?
        .into_iter()
        .map(|s| RenderedStory {
            story_html: markdown(&s.story),
            title: s.title,
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("stories", &stories);

    render_page(&state.tera, Page::RealStories, "views/stories.html", &context)
}
