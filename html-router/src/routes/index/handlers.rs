use axum::response::IntoResponse;
use serde::Serialize;

use crate::middlewares::response_middleware::TemplateResponse;

#[derive(Serialize)]
pub struct IndexPageData {
    page_title: &'static str,
}

pub async fn index_handler() -> impl IntoResponse {
    TemplateResponse::new_template(
        "index.html",
        IndexPageData {
            page_title: "Textbook Chatbot",
        },
    )
}

pub async fn not_found_handler() -> impl IntoResponse {
    TemplateResponse::not_found()
}
