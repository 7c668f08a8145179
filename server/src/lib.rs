use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use indexcore::{query, Hit, SharedIndex};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub index: SharedIndex,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_hits: usize,
    pub results: Vec<Hit>,
}

/// Routes over a shared index. The index may still be filling while the
/// crawl runs; handlers only ever take the read side of the lock.
pub fn build_app(index: SharedIndex) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(query_form))
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(AppState { index })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

const QUERY_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><title>Site Search</title></head>
<body>
<h1>Site Search</h1>
<form action="/search" method="get">
  <input type="text" name="q" placeholder="Search word" autofocus>
  <button type="submit">Search</button>
</form>
</body>
</html>
"#;

async fn query_form() -> Html<&'static str> {
    Html(QUERY_FORM)
}

/// `GET /search?q=word` — stems the word and returns the top ten ranked
/// documents. An unknown word is an empty result list, not an error.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let results = {
        let idx = state.index.read();
        query::query(&idx, &params.q)
    };
    let total_hits = results.len();
    Json(SearchResponse {
        query: params.q,
        total_hits,
        results,
    })
}
