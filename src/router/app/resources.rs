use axum::{extract::State, response::Html};

use serde::Serialize;
use tera::Context;

use std::sync::Arc;

use super::{
    error::AppError,
    page::{render_page, Page},
};
use crate::AppState;

#[derive(Serialize)]
struct Link {
    label: &'static str,
    href: &'static str,
}

const EVENTS: [&str; 2] = [
    "Upstander Workshop - October 15, 2023",
    "Human Rights Seminar - November 1, 2023",
];

const RESOURCES: [Link; 2] = [
    Link {
        label: "Mental Health Hotline",
        href: "https://example.com",
    },
    Link {
        label: "Anti-Bullying Organization",
        href: "https://example.com",
    },
];

pub async fn resources(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("events", &EVENTS);
    context.insert("resources", &RESOURCES);

    render_page(&state.tera, Page::EventsResources, "views/resources.html", &context)
}
