use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use tera::Context;

use std::sync::Arc;

use crate::{
    router::app::page::{render_layout, Page},
    AppState,
};

/// Replaces any error response with the error view rendered inside the layout.
pub async fn handle_error<B>(
    State(state): State<Arc<AppState>>,
    req: Request<B>,
    next: Next<B>,
) -> Response
where
    B: Send + 'static,
{
    let active = Page::from_path(req.uri().path());
    let response = next.run(req).await;

    let status = response.status();
    if status.as_u16() < 400 {
        return response;
    }

    let mut context = Context::new();
    context.insert("status_code", &status.as_u16());
    context.insert("status_text", status.canonical_reason().unwrap_or("Error"));

    let rendered = state
        .tera
        .render("views/error.html", &context)
        .and_then(|error| render_layout(&state.tera, active, "Error", &error));

    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("failed to render error page: {}", e);
            (status, status.to_string()).into_response()
        }
    }
}
