use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use super::error::AppError;

/// The destinations offered in the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Introduction,
    UpstanderProject,
    RealStories,
    StrengthSurvey,
    PersonalMemories,
    ScenarioGeneration,
    EventsResources,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Introduction,
        Page::UpstanderProject,
        Page::RealStories,
        Page::StrengthSurvey,
        Page::PersonalMemories,
        Page::ScenarioGeneration,
        Page::EventsResources,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Introduction => "Introduction",
            Page::UpstanderProject => "Upstander Project",
            Page::RealStories => "Real Stories",
            Page::StrengthSurvey => "Strength Survey",
            Page::PersonalMemories => "Personal Memories",
            Page::ScenarioGeneration => "Scenario Generation",
            Page::EventsResources => "Events & Resources",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Introduction => "/",
            Page::UpstanderProject => "/project",
            Page::RealStories => "/stories",
            Page::StrengthSurvey => "/survey",
            Page::PersonalMemories => "/memories",
            Page::ScenarioGeneration => "/scenario",
            Page::EventsResources => "/resources",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.path() == path)
    }
}

#[derive(Serialize)]
struct NavEntry {
    title: &'static str,
    path: &'static str,
    active: bool,
}

/// Renders `view` and wraps it in the layout with `page` highlighted in the sidebar.
pub fn render_page(
    tera: &Tera,
    page: Page,
    view: &str,
    context: &Context,
) -> Result<Html<String>, AppError> {
    let view_html = tera.render(view, context)?;
    let html = render_layout(tera, Some(page), page.title(), &view_html)?;
    Ok(Html(html))
}

/// Wraps already rendered view HTML in the layout. `active` is `None` for pages outside the sidebar.
pub fn render_layout(
    tera: &Tera,
    active: Option<Page>,
    title: &str,
    view_html: &str,
) -> Result<String, tera::Error> {
    let pages = Page::ALL
        .into_iter()
        .map(|p| NavEntry {
            title: p.title(),
            path: p.path(),
            active: Some(p) == active,
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("view", view_html);
    context.insert("title", title);
    context.insert("pages", &pages);
    context.insert("with_footer", &true);
    tera.render("views/main.html", &context)
}

pub fn markdown(text: &str) -> String {
    comrak::markdown_to_html(text, &comrak::Options::default())
}
