//! HTTP request handlers.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::search::search;

use super::AppState;
use super::render;

/// Form field carrying the search query.
const QUERY_FIELD: &str = "query";

/// `GET /`: the search page without results.
pub async fn index_page(State(state): State<AppState>) -> Response {
    search_response(&state, "").await
}

/// `POST /`: run a search and render the matching committees.
pub async fn search_page(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            log::debug!("rejected search form: {}", rejection);
            return (StatusCode::BAD_REQUEST, "failed parsing the request form").into_response();
        }
    };

    let Some(query) = first_value(fields, QUERY_FIELD) else {
        return (StatusCode::BAD_REQUEST, "no query value").into_response();
    };

    log::info!("search for {}", query);
    search_response(&state, &query).await
}

/// `GET /data/`: number of committees in the current snapshot.
pub async fn data_page(State(state): State<AppState>) -> Html<String> {
    Html(render::render_stats(&state.store.snapshot()))
}

async fn search_response(state: &AppState, query: &str) -> Response {
    let index = state.store.snapshot();
    let results = search(&index, query, &state.base_url);

    let page = match render::load_template(&state.template_path).await {
        Ok(template) => render::render_page(&template, query, &results),
        Err(e) => Err(e),
    };

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("failed to render search page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to render search page",
            )
                .into_response()
        }
    }
}

/// First value submitted for `name`, if any.
fn first_value(fields: Vec<(String, String)>, name: &str) -> Option<String> {
    fields
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
