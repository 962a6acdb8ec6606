use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Extension,
};
use common::utils::template_engine::{ProvidesTemplateEngine, Value};
use minijinja::context;
use serde::Serialize;
use tracing::error;

use crate::html_state::HtmlState;

pub trait ProvidesHtmlState {
    fn html_state(&self) -> &HtmlState;
}

#[derive(Clone, Debug)]
pub enum TemplateKind {
    Full(String),
    Error(StatusCode),
}

/// A page to be rendered by [`with_template_response`] once the handler
/// returns.
#[derive(Clone)]
pub struct TemplateResponse {
    template_kind: TemplateKind,
    context: Value,
}

impl TemplateResponse {
    pub fn new_template<T: Serialize>(name: impl Into<String>, context: T) -> Self {
        Self {
            template_kind: TemplateKind::Full(name.into()),
            context: Value::from_serialize(&context),
        }
    }

    pub fn error(status: StatusCode, title: &str, description: &str) -> Self {
        let ctx = context! {
            status_code => status.as_u16(),
            title => title,
            description => description
        };
        Self {
            template_kind: TemplateKind::Error(status),
            context: ctx,
        }
    }

    pub fn not_found() -> Self {
        Self::error(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            "The page you're looking for doesn't exist.",
        )
    }
}

impl IntoResponse for TemplateResponse {
    fn into_response(self) -> Response {
        Extension(self).into_response()
    }
}

/// Handler context plus the values every page needs.
#[derive(Serialize)]
struct ContextWrapper<'a> {
    /// Subject the assistant answers about.
    specialization: &'a str,
    /// Handler-supplied context.
    #[serde(flatten)]
    context: HashMap<String, Value>,
}

/// Flattens a map-shaped context so it can be merged with the shared values.
fn context_to_map(value: &Value) -> Result<HashMap<String, Value>, minijinja::value::ValueKind> {
    match value.kind() {
        minijinja::value::ValueKind::Map => {
            let mut map = HashMap::new();
            if let Ok(keys) = value.try_iter() {
                for key in keys {
                    if let Ok(val) = value.get_item(&key) {
                        map.insert(key.to_string(), val);
                    }
                }
            }
            Ok(map)
        }
        minijinja::value::ValueKind::None | minijinja::value::ValueKind::Undefined => {
            Ok(HashMap::new())
        }
        other => Err(other),
    }
}

pub async fn with_template_response<S>(State(state): State<S>, req: Request, next: Next) -> Response
where
    S: ProvidesTemplateEngine + ProvidesHtmlState + Clone + Send + Sync + 'static,
{
    let response = next.run(req).await;

    let Some(template_response) = response.extensions().get::<TemplateResponse>().cloned() else {
        return response;
    };

    let template_engine = state.template_engine();

    let context_map = match context_to_map(&template_response.context) {
        Ok(map) => map,
        Err(kind) => {
            error!(
                "Template context must be a map or unit, got kind={:?} for template_kind={:?}",
                kind, template_response.template_kind
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response();
        }
    };

    let context = ContextWrapper {
        specialization: &state.html_state().config.assistant_specialization,
        context: context_map,
    };

    match &template_response.template_kind {
        TemplateKind::Full(name) => {
            match template_engine.render(name, &Value::from_serialize(&context)) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    error!("Failed to render template '{}': {:?}", name, e);
                    (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
                }
            }
        }
        TemplateKind::Error(status) => {
            match template_engine.render("errors/error.html", &Value::from_serialize(&context)) {
                Ok(html) => (*status, Html(html)).into_response(),
                Err(e) => {
                    error!("Critical: Failed to render 'errors/error.html': {:?}", e);
                    (*status, Html(fallback_error())).into_response()
                }
            }
        }
    }
}

/// Static page used when the error template itself cannot be rendered.
fn fallback_error() -> String {
    r#"
    <html>
        <body>
            <div class="container">
                <h1>Error</h1>
                <p>Sorry, something went wrong displaying this page.</p>
            </div>
        </body>
    </html>
    "#
    .to_string()
}
