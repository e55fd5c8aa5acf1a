use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct NewProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
}

/// GET /api/profile
/// Responds with the profile, or `null` while none exists. Clients use
/// this as the gate for the project-editing flows.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<Option<ProfileRow>>, AppError> {
    let profile =
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles ORDER BY created_at ASC LIMIT 1")
            .fetch_optional(&state.db)
            .await?;
    Ok(Json(profile))
}

/// POST /api/profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(body): Json<NewProfile>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    let profile = sqlx::query_as::<_, ProfileRow>(
        "INSERT INTO profiles (name, headline) VALUES ($1, $2) RETURNING *",
    )
    .bind(name)
    .bind(&body.headline)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}
