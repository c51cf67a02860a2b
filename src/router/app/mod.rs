use axum::{
    routing::{get, post},
    Router,
};

use std::sync::Arc;

use crate::AppState;

pub mod error;
pub mod page;

mod home;
use home::introduction;
mod project;
use project::{submit_quiz, upstander_project};
mod stories;
use stories::real_stories;
mod survey;
use survey::{strength_survey, submit_survey};
mod memories;
use memories::{personal_memories, share_story};
mod scenario;
use scenario::{get_advice, scenario_generation};
mod resources;
use resources::resources;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(introduction))
        .route("/project", get(upstander_project))
        .route("/project/quiz", post(submit_quiz))
        .route("/stories", get(real_stories))
        .route("/survey", get(strength_survey).post(submit_survey))
        .route("/memories", get(personal_memories).post(share_story))
        .route("/scenario", get(scenario_generation).post(get_advice))
        .route("/resources", get(resources))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tera::Tera;
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{
        ai::relay::AdviceRelay,
        data::repository::{
            tests::memory_pool, InteractionRepository, StoryRepository, INTERACTIONS_MIGRATOR,
            STORIES_MIGRATOR,
        },
        middleware::handle_error,
    };

    async fn setup(advice_api_url: &str) -> (Arc<AppState>, Router) {
        let state = Arc::new(AppState {
            tera: Tera::new("templates/**/*").unwrap(),
            interactions: InteractionRepository {
                pool: memory_pool(&INTERACTIONS_MIGRATOR).await,
            },
            stories: StoryRepository {
                pool: memory_pool(&STORIES_MIGRATOR).await,
            },
            relay: AdviceRelay::new(advice_api_url, None),
        });

        let app = app_router(state.clone()).layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handle_error,
        ));
        (state, app)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_every_page_renders_with_nav_and_footer() {
        let (_, app) = setup("http://127.0.0.1:9/").await;

        for page in page::Page::ALL {
            let response = app.clone().oneshot(get(page.path())).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", page.path());

            let html = body_text(response).await;
            assert!(html.contains("Upstander Program. All rights reserved."));
            assert!(html.contains("mailto:info@upstanderprogram.com"));
            for other in page::Page::ALL {
                assert!(html.contains(&format!("href=\"{}\"", other.path())));
            }
        }
    }

    #[tokio::test]
    async fn test_shared_story_appears_in_community_stories() {
        let (state, app) = setup("http://127.0.0.1:9/").await;

        let response = app
            .clone()
            .oneshot(post_form("/memories", "user_id=u1&story=I+helped+a+classmate"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Thank you for sharing your story!"));
        assert!(html.contains("User u1:"));
        assert!(html.contains("I helped a classmate"));

        let stored = state.interactions.fetch_user_stories().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].response, "N/A");

        let html = body_text(app.oneshot(get("/memories")).await.unwrap()).await;
        assert!(html.contains("I helped a classmate"));
        assert!(!html.contains("Thank you for sharing your story!"));
    }

    #[tokio::test]
    async fn test_quiz_feedback() {
        let (_, app) = setup("http://127.0.0.1:9/").await;

        let correct = app
            .clone()
            .oneshot(post_form(
                "/project/quiz",
                "answer=Someone+who+takes+action+to+help+others",
            ))
            .await
            .unwrap();
        assert!(body_text(correct)
            .await
            .contains("Correct! An upstander takes action to help others."));

        let wrong = app
            .oneshot(post_form("/project/quiz", "answer=Someone+who+causes+problems"))
            .await
            .unwrap();
        assert!(body_text(wrong).await.contains("Incorrect. Try again!"));
    }

    #[tokio::test]
    async fn test_survey_echoes_reaction() {
        let (_, app) = setup("http://127.0.0.1:9/").await;

        let response = app
            .clone()
            .oneshot(post_form("/survey", "reaction=With+anger"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Your reaction: With anger"));
        assert!(html.contains("Empathy"));

        let rejected = app
            .oneshot(post_form("/survey", "reaction=Sleepily"))
            .await
            .unwrap();
        assert!(rejected.status().is_client_error());
        assert!(body_text(rejected).await.contains("Upstander Program"));
    }

    #[tokio::test]
    async fn test_real_stories_lists_curated_rows() {
        let (state, app) = setup("http://127.0.0.1:9/").await;
        sqlx::query("INSERT INTO upstander_stories (title, story) VALUES (?, ?)")
            .bind("Irena Sendler")
            .bind("Smuggled *2,500* children to safety.")
            .execute(&*state.stories.pool)
            .await
            .unwrap();

        let html = body_text(app.oneshot(get("/stories")).await.unwrap()).await;
        assert!(html.contains("Irena Sendler"));
        assert!(html.contains("<em>2,500</em>"));
    }

    #[tokio::test]
    async fn test_scenario_advice_is_shown_and_recorded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"generated_text": "Speak up and report it."}])),
            )
            .mount(&server)
            .await;
        let (state, app) = setup(&server.uri()).await;

        let response = app
            .oneshot(post_form("/scenario", "scenario=Public+Discrimination"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Speak up and report it."));

        let chats = state.interactions.fetch_chats().await.unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].user_id, "anonymous");
        assert_eq!(chats[0].message, "How to handle Public Discrimination?");
        assert!(state.interactions.fetch_user_stories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scenario_relay_failure_is_displayed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;
        let (_, app) = setup(&server.uri()).await;

        let response = app
            .oneshot(post_form("/scenario", "scenario=Bullying&user_id=u7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Error: 401 - unauthorized"));
    }

    #[tokio::test]
    async fn test_storage_failure_renders_500_view() {
        let (state, app) = setup("http://127.0.0.1:9/").await;
        sqlx::query("DROP TABLE interactions")
            .execute(&*state.interactions.pool)
            .await
            .unwrap();

        let response = app.oneshot(get("/memories")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_text(response).await;
        assert!(html.contains("<h1>500</h1>"));
        assert!(html.contains("Upstander Program. All rights reserved."));
    }

    #[tokio::test]
    async fn test_unknown_route_renders_error_view() {
        let (_, app) = setup("http://127.0.0.1:9/").await;

        let response = app.oneshot(get("/chat")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("404"));
    }
}
