use axum::{extract::State, response::Html, Form};

use serde::{Deserialize, Serialize};
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{render_page, Page},
};
use crate::AppState;

pub const QUIZ_QUESTION: &str = "What does it mean to be an upstander?";

pub const QUIZ_OPTIONS: [&str; 3] = [
    "Someone who ignores problems",
    "Someone who takes action to help others",
    "Someone who causes problems",
];

const CORRECT_ANSWER: &str = "Someone who takes action to help others";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizOutcome {
    Correct,
    Incorrect,
}

impl QuizOutcome {
    pub fn message(self) -> &'static str {
        match self {
            QuizOutcome::Correct => "Correct! An upstander takes action to help others.",
            QuizOutcome::Incorrect => "Incorrect. Try again!",
        }
    }
}

pub fn grade_quiz(answer: &str) -> QuizOutcome {
    if answer == CORRECT_ANSWER {
        QuizOutcome::Correct
    } else {
        QuizOutcome::Incorrect
    }
}

#[derive(Deserialize, Debug)]
pub struct QuizSubmission {
    answer: Option<String>,
}

pub async fn upstander_project(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, None, None)
}

pub async fn submit_quiz(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<QuizSubmission>,
) -> Result<Html<String>, AppError> {
    let answer = submission.answer.unwrap_or_default();
    let outcome = grade_quiz(&answer);
    tracing::debug!(?outcome, "quiz submitted");

    render(&state, Some(&answer), Some(outcome))
}

fn render(
    state: &AppState,
    selected: Option<&str>,
    outcome: Option<QuizOutcome>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("question", QUIZ_QUESTION);
    context.insert("options", &QUIZ_OPTIONS);
    context.insert("selected", &selected);
    context.insert("outcome", &outcome);
    context.insert("outcome_message", &outcome.map(QuizOutcome::message));

    render_page(&state.tera, Page::UpstanderProject, "views/project.html", &context)
}
