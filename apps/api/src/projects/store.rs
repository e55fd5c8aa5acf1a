use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{ProjectLinks, ProjectRow};

use super::filter::{list_query, ListFilter};

/// Caller-supplied document for the create flow. Only `title` is required;
/// everything else defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Partial document for the update flow. Absent fields keep their stored
/// value; a present `links` replaces the whole links document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub links: Option<ProjectLinks>,
}

pub async fn list_projects(
    pool: &PgPool,
    filter: &ListFilter,
) -> Result<Vec<ProjectRow>, sqlx::Error> {
    let mut query = list_query(filter);
    query.build_query_as::<ProjectRow>().fetch_all(pool).await
}

pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Persists a new project and returns it with its store-assigned identity.
pub async fn create_project(pool: &PgPool, input: &NewProject) -> Result<ProjectRow, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects (title, description, skills, links)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.skills)
    .bind(Json(&input.links))
    .fetch_one(pool)
    .await
}

/// Replaces the provided fields on the matching document. Returns `None`
/// when the identity does not exist.
pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    patch: ProjectPatch,
) -> Result<Option<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        UPDATE projects SET
            title       = COALESCE($2, title),
            description = COALESCE($3, description),
            skills      = COALESCE($4, skills),
            links       = COALESCE($5, links),
            updated_at  = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(patch.title)
    .bind(patch.description)
    .bind(patch.skills)
    .bind(patch.links.map(Json))
    .fetch_optional(pool)
    .await
}

/// Removes the matching document. Returns how many rows matched, so callers
/// can tell a real delete from a no-op even though both succeed.
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
