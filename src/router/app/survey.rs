use axum::{extract::State, response::Html, Form};

use serde::{Deserialize, Serialize};
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{render_page, Page},
};
use crate::AppState;

/// Placeholder result shown for every submission.
pub const TOP_STRENGTH: &str = "Empathy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    Calmly,
    Anxiously,
    #[serde(rename = "With anger")]
    WithAnger,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Calmly, Reaction::Anxiously, Reaction::WithAnger];

    pub fn label(self) -> &'static str {
        match self {
            Reaction::Calmly => "Calmly",
            Reaction::Anxiously => "Anxiously",
            Reaction::WithAnger => "With anger",
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SurveySubmission {
    reaction: Reaction,
}

pub async fn strength_survey(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, None)
}

pub async fn submit_survey(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<SurveySubmission>,
) -> Result<Html<String>, AppError> {
    render(&state, Some(submission.reaction))
}

fn render(state: &AppState, reaction: Option<Reaction>) -> Result<Html<String>, AppError> {
    let options = Reaction::ALL.map(Reaction::label);

    let mut context = Context::new();
    context.insert("options", &options);
    context.insert("reaction", &reaction.map(Reaction::label));
    context.insert("top_strength", TOP_STRENGTH);

    render_page(&state.tera, Page::StrengthSurvey, "views/survey.html", &context)
}
