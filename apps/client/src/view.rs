//! The projects tab: a local cache of the last fetched list plus the
//! search, add, delete, and modal-edit flows that mutate it.

use tracing::debug;
use uuid::Uuid;

use crate::api::{ClientError, PortfolioApi};
use crate::types::{NewProject, Profile, Project, ProjectLinks, ProjectPatch, Skill};

/// What the view is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// List loaded, nothing in flight.
    Idle,
    /// A list-replacing request is in flight.
    Searching,
    /// The edit modal is open with a local draft.
    Editing,
}

/// Draft fields for the add-project form.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub github: String,
    pub demo: String,
}

/// Local draft behind the edit modal. Mirrors the fields the modal
/// exposes; tags are not editable there.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub github: String,
    pub demo: String,
}

pub struct ProjectsView<A> {
    api: A,
    profile: Option<Profile>,
    skill_options: Vec<Skill>,
    projects: Vec<Project>,
    pub search: String,
    pub draft: ProjectForm,
    editing: Option<EditDraft>,
    issued_seq: u64,
    applied_seq: u64,
}

impl<A: PortfolioApi> ProjectsView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            profile: None,
            skill_options: Vec::new(),
            projects: Vec::new(),
            search: String::new(),
            draft: ProjectForm::default(),
            editing: None,
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// Initial load: the profile gate and tag options first, then the
    /// unfiltered list.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.profile = self.api.get_profile().await?;
        self.skill_options = self.api.list_skills().await?;
        self.show_all().await
    }

    /// Project mutations are only offered once a profile exists.
    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skill_options(&self) -> &[Skill] {
        &self.skill_options
    }

    pub fn phase(&self) -> Phase {
        if self.editing.is_some() {
            Phase::Editing
        } else if self.applied_seq < self.issued_seq {
            Phase::Searching
        } else {
            Phase::Idle
        }
    }

    /// Replaces the list with the full collection.
    pub async fn show_all(&mut self) -> Result<(), ClientError> {
        let seq = self.begin_list_request();
        match self.api.list_projects(None, None).await {
            Ok(projects) => {
                self.apply_list(seq, projects);
                Ok(())
            }
            Err(e) => {
                self.settle(seq);
                Err(e)
            }
        }
    }

    /// Two-phase search: the term runs against title/description first;
    /// only an empty result retries it as a skills filter. Both phases
    /// share one sequence number, so a stale pair can never replace a
    /// newer list.
    pub async fn run_search(&mut self) -> Result<(), ClientError> {
        let term = self.search.trim().to_string();
        if term.is_empty() {
            return self.show_all().await;
        }

        let seq = self.begin_list_request();
        let result = self.search_with_fallback(&term).await;
        match result {
            Ok(projects) => {
                if !self.apply_list(seq, projects) {
                    debug!("discarded stale search response for '{term}'");
                }
                Ok(())
            }
            Err(e) => {
                self.settle(seq);
                Err(e)
            }
        }
    }

    async fn search_with_fallback(&self, term: &str) -> Result<Vec<Project>, ClientError> {
        let by_text = self.api.list_projects(Some(term), None).await?;
        if !by_text.is_empty() {
            return Ok(by_text);
        }
        self.api.list_projects(None, Some(term)).await
    }

    /// Submits the add form. A blank title or a missing profile is a
    /// no-op, matching the form's guard. Returns whether a project was
    /// created; the server's copy (with its assigned identity) is what
    /// lands in the list.
    pub async fn add_project(&mut self) -> Result<bool, ClientError> {
        if !self.has_profile() || self.draft.title.trim().is_empty() {
            return Ok(false);
        }

        let new_project = NewProject {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            skills: self.draft.skills.clone(),
            links: links_from(&self.draft.github, &self.draft.demo),
        };
        let created = self.api.create_project(&new_project).await?;
        self.projects.push(created);
        self.draft = ProjectForm::default();
        Ok(true)
    }

    /// Adds the tag to the draft, or removes it if already selected.
    pub fn toggle_draft_skill(&mut self, name: &str) {
        if let Some(pos) = self.draft.skills.iter().position(|s| s == name) {
            self.draft.skills.remove(pos);
        } else {
            self.draft.skills.push(name.to_string());
        }
    }

    /// Deletes by identity and drops the matching element locally.
    pub async fn delete_project(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.api.delete_project(id).await?;
        self.projects.retain(|p| p.id != id);
        Ok(())
    }

    /// Opens the edit modal over the given project. Returns false when the
    /// identity is not in the local list.
    pub fn open_edit(&mut self, id: Uuid) -> bool {
        let Some(project) = self.projects.iter().find(|p| p.id == id) else {
            return false;
        };
        self.editing = Some(EditDraft {
            id,
            title: project.title.clone(),
            description: project.description.clone(),
            github: project.links.github.clone().unwrap_or_default(),
            demo: project.links.demo.clone().unwrap_or_default(),
        });
        true
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.editing.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves the modal draft as a partial update. `Ok(false)` means the
    /// identity vanished server-side (the API answers `null`); the stale
    /// local copy is dropped.
    pub async fn save_edit(&mut self) -> Result<bool, ClientError> {
        let Some(draft) = self.editing.clone() else {
            return Ok(false);
        };

        let patch = ProjectPatch {
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone()),
            skills: None,
            links: Some(links_from(&draft.github, &draft.demo)),
        };
        match self.api.update_project(draft.id, &patch).await? {
            Some(updated) => {
                if let Some(slot) = self.projects.iter_mut().find(|p| p.id == draft.id) {
                    *slot = updated;
                }
                self.editing = None;
                Ok(true)
            }
            None => {
                self.projects.retain(|p| p.id != draft.id);
                self.editing = None;
                Ok(false)
            }
        }
    }

    fn begin_list_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Replaces the list unless a later response already did. Responses
    /// are dropped whole, never merged.
    fn apply_list(&mut self, seq: u64, projects: Vec<Project>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.projects = projects;
        true
    }

    /// Marks a request as resolved without touching the list (error path).
    fn settle(&mut self, seq: u64) {
        if seq > self.applied_seq {
            self.applied_seq = seq;
        }
    }
}

fn links_from(github: &str, demo: &str) -> ProjectLinks {
    ProjectLinks {
        github: filled(github),
        demo: filled(demo),
    }
}

fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
