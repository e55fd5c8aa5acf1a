use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// External links attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
}

/// A portfolio project as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Create-request body. Only `title` is required server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub links: ProjectLinks,
}

/// Partial update body; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

/// A selectable tag from the read-only reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

/// The site owner's profile; its presence gates the editing flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
}
