use axum::{extract::State, response::Html, Form};

use serde::{Deserialize, Serialize};
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{markdown, render_page, Page},
};
use crate::{data::model::NewInteraction, AppState};

const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Bullying,
    #[serde(rename = "Workplace Harassment")]
    WorkplaceHarassment,
    #[serde(rename = "Public Discrimination")]
    PublicDiscrimination,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Bullying,
        Scenario::WorkplaceHarassment,
        Scenario::PublicDiscrimination,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Bullying => "Bullying",
            Scenario::WorkplaceHarassment => "Workplace Harassment",
            Scenario::PublicDiscrimination => "Public Discrimination",
        }
    }

    pub fn prompt(self) -> String {
        format!("How to handle {}?", self.label())
    }
}

#[derive(Deserialize, Debug)]
pub struct AdviceRequest {
    scenario: Scenario,
    #[serde(default)]
    user_id: Option<String>,
}

pub async fn scenario_generation(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, None, None)
}

pub async fn get_advice(
    State(state): State<Arc<AppState>>,
    Form(request): Form<AdviceRequest>,
) -> Result<Html<String>, AppError> {
    let prompt = request.scenario.prompt();
    let advice = state.relay.get_advice(&prompt).await;

    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string());
    state
        .interactions
        .record(&NewInteraction::Chat {
            user_id,
            message: prompt,
            response: advice.clone(),
        })
        .await?;

    render(&state, Some(request.scenario), Some(&advice))
}

fn render(
    state: &AppState,
    selected: Option<Scenario>,
    advice: Option<&str>,
) -> Result<Html<String>, AppError> {
    let options = Scenario::ALL.map(Scenario::label);

    let mut context = Context::new();
    context.insert("options", &options);
    context.insert("selected", &selected.map(Scenario::label));
    context.insert("advice_html", &advice.map(markdown));

    render_page(&state.tera, Page::ScenarioGeneration, "views/scenario.html", &context)
}
