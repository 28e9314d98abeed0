use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use haiku_engine::Composer;
use haiku_lexicon::Lexicon;

#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<Composer<Lexicon>>,
    pub max_text_len: usize,
}

#[derive(Deserialize)]
pub struct HaikusRequest {
    pub text: String,
    pub seed: Option<u32>,
    pub regen: Option<u32>,
}

#[derive(Deserialize)]
pub struct SyllablesQuery {
    pub text: String,
}

#[derive(Serialize)]
pub struct HaikusResponse {
    topic: String,
    seed: u32,
    regen: u32,
    candidates: Vec<Candidate>,
}

#[derive(Serialize)]
struct Candidate {
    seed: u32,
    lines: [String; 3],
    syllables: [usize; 3],
    exact: bool,
    haiku: String,
}

#[derive(Serialize)]
pub struct SyllablesResponse {
    lines: Vec<String>,
    counts: [usize; 3],
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(robots))
        .route("/healthz", get(healthz))
        .route("/v1/haikus", post(haikus))
        .route("/v1/syllables", get(syllables))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn robots() -> impl IntoResponse {
    (
        axum::http::HeaderMap::from_iter([(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )]),
        "User-agent: *\nDisallow: /",
    )
}

async fn haikus(
    State(state): State<AppState>,
    Json(req): Json<HaikusRequest>,
) -> Result<Json<HaikusResponse>, ApiError> {
    if req.text.len() > state.max_text_len {
        return Err(ApiError::bad_request(format!(
            "text must be at most {} bytes",
            state.max_text_len
        )));
    }

    let seed = req.seed.unwrap_or_else(rand::random);
    let regen = req.regen.unwrap_or(0);
    let composed = state.composer.candidates(&req.text, seed, regen);

    // Classification ignores the seed, so all three candidates share a topic.
    let topic = composed[0].topic.name().to_string();
    let candidates = composed
        .into_iter()
        .map(|haiku| Candidate {
            seed: haiku.seed,
            haiku: haiku.text(),
            lines: haiku.lines,
            syllables: haiku.syllables,
            exact: haiku.exact,
        })
        .collect();

    Ok(Json(HaikusResponse {
        topic,
        seed,
        regen,
        candidates,
    }))
}

async fn syllables(
    State(state): State<AppState>,
    Query(params): Query<SyllablesQuery>,
) -> Result<Json<SyllablesResponse>, ApiError> {
    if params.text.len() > state.max_text_len {
        return Err(ApiError::bad_request(format!(
            "text must be at most {} bytes",
            state.max_text_len
        )));
    }

    let counts = state.composer.count_575(&params.text);
    let lines = params.text.split('\n').take(3).map(str::to_string).collect();

    Ok(Json(SyllablesResponse { lines, counts }))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
