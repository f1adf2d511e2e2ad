use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

static UI_HTML: &str = include_str!("../../assets/ui.html");

pub async fn ui_handler() -> Html<&'static str> {
    Html(UI_HTML)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
