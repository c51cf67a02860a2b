use axum::{extract::State, response::Html};

use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{render_page, Page},
};
use crate::AppState;

pub async fn introduction(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("project_path", Page::UpstanderProject.path());
    context.insert("survey_path", Page::StrengthSurvey.path());

    render_page(&state.tera, Page::Introduction, "views/introduction.html", &context)
}
