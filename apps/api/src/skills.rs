use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::skill::SkillRow;
use crate::state::AppState;

/// GET /api/skills
/// The reference list that populates selectable tags on a project.
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillRow>>, AppError> {
    let skills = sqlx::query_as::<_, SkillRow>("SELECT * FROM skills")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(skills))
}
