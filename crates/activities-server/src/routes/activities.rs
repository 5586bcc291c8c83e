use std::collections::BTreeMap;

use activities_core::Activity;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /activities — the full name → record mapping.
pub async fn list_activities(
    State(app): State<AppState>,
) -> Json<BTreeMap<String, Activity>> {
    let dir = app.directory.read().await;
    Json(dir.activities().clone())
}

#[derive(serde::Deserialize)]
pub struct SignupParams {
    pub email: String,
}

/// POST /activities/{activity_name}/signup?email=... — enroll a student.
pub async fn signup(
    State(app): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut dir = app.directory.write().await;
    let message = dir.signup(&activity_name, &params.email)?;

    tracing::info!(activity = %activity_name, email = %params.email, "signup accepted");

    Ok(Json(serde_json::json!({ "message": message })))
}
