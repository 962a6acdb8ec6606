use api_router::{api_routes_v1, api_state::ApiState, chat_routes};
use axum::{extract::FromRef, Router};
use html_router::{html_routes, html_state::HtmlState};

#[derive(Clone, FromRef)]
pub struct AppState {
    api_state: ApiState,
    html_state: HtmlState,
}

/// Assembles the full application: chat page, static assets, `/chat` and the
/// `/api/v1` probes.
pub fn build_router(api_state: ApiState, html_state: HtmlState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes_v1())
        .merge(chat_routes(&api_state))
        .merge(html_routes(&html_state))
        .with_state(AppState {
            api_state,
            html_state,
        })
}
