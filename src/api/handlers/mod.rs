use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::form::{self, render::Page, AssignmentForm, FormErrors, FormHandler};
use crate::models::*;
use crate::services::{Message, Notifier, StatusMessages};

const PAGE_TITLE: &str = "Name";
const FORM_ACTION: &str = "/assignment";

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// HTML form
// ============================================================

pub async fn show_form() -> Html<String> {
    Html(render_page(&[], &FormErrors::default(), None))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> (StatusCode, Html<String>) {
    let messages = StatusMessages::new();
    let handler = AssignmentForm::new(&messages, &state.log);

    match form::process(&handler, &submission) {
        Ok(()) => {
            let page = render_page(&messages.drain(), &FormErrors::default(), None);
            (StatusCode::OK, Html(page))
        }
        Err(errors) => {
            for (_, message) in errors.iter() {
                messages.add_error(message);
            }
            let page = render_page(&messages.drain(), &errors, Some(&submission.name));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page))
        }
    }
}

fn render_page(messages: &[Message], errors: &FormErrors, name: Option<&str>) -> String {
    let definition = form::name_form_definition();
    let mut values = BTreeMap::new();
    if let Some(name) = name {
        values.insert("name", name);
    }

    Page {
        title: PAGE_TITLE,
        action: FORM_ACTION,
        form: &definition,
        messages,
        errors,
        values,
    }
    .render()
}

// ============================================================
// JSON API
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionErrorResponse {
    pub errors: FormErrors,
}

pub async fn api_submit(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmissionResponse>, (StatusCode, Json<SubmissionErrorResponse>)> {
    let messages = StatusMessages::new();
    let handler = AssignmentForm::new(&messages, &state.log);

    form::process(&handler, &submission)
        .map(|()| {
            Json(SubmissionResponse {
                messages: messages.drain(),
            })
        })
        .map_err(|errors| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SubmissionErrorResponse { errors }),
            )
        })
}

pub async fn form_definition(State(state): State<AppState>) -> Json<form::FormDefinition> {
    let messages = StatusMessages::new();
    Json(AssignmentForm::new(&messages, &state.log).build())
}

// ============================================================
// Log
// ============================================================

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
    pub channel: Option<String>,
    /// Only records at least this severe (e.g. `warning` also returns errors).
    pub severity: Option<String>,
}

pub async fn recent_log(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<LogRecord>>, (StatusCode, String)> {
    let min_severity = match query.severity.as_deref() {
        Some(s) => Some(Severity::from_str(s).ok_or_else(|| {
            tracing::warn!("Unknown severity filter: {}", s);
            (StatusCode::BAD_REQUEST, format!("Unknown severity: {}", s))
        })?),
        None => None,
    };

    let records = match query.channel {
        Some(channel) => state.log.by_channel(&channel),
        None => state.log.recent(None),
    };
    let records = records
        .into_iter()
        .filter(|r| min_severity.map_or(true, |min| r.severity <= min))
        .take(query.limit.unwrap_or(usize::MAX))
        .collect();

    Ok(Json(records))
}
