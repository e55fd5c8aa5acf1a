use crate::models::project::ProjectLinks;

use super::store::NewProject;

/// Boundary validation for the create flow. The store would accept almost
/// anything, so shape is checked here instead: `title` must be non-empty
/// after trimming, and blank link strings collapse to absent.
pub fn validate_new_project(mut input: NewProject) -> Result<NewProject, String> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err("title is required".to_string());
    }
    input.title = title.to_string();
    input.links = normalize_links(input.links);
    Ok(input)
}

/// Collapses empty or whitespace-only link values to `None`. Browsers
/// submit empty strings for untouched form fields.
pub fn normalize_links(links: ProjectLinks) -> ProjectLinks {
    ProjectLinks {
        github: clean_url(links.github),
        demo: clean_url(links.demo),
    }
}

fn clean_url(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: String::new(),
            skills: vec![],
            links: ProjectLinks::default(),
        }
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(validate_new_project(new_project("")).is_err());
    }

    #[test]
    fn whitespace_title_is_rejected() {
        assert!(validate_new_project(new_project("   ")).is_err());
    }

    #[test]
    fn title_is_trimmed() {
        let project = validate_new_project(new_project("  Chat App  ")).unwrap();
        assert_eq!(project.title, "Chat App");
    }

    #[test]
    fn title_alone_is_enough() {
        let project = validate_new_project(new_project("Chat App")).unwrap();
        assert_eq!(project.description, "");
        assert!(project.skills.is_empty());
        assert_eq!(project.links, ProjectLinks::default());
    }

    #[test]
    fn blank_links_collapse_to_absent() {
        let links = normalize_links(ProjectLinks {
            github: Some("".to_string()),
            demo: Some("   ".to_string()),
        });
        assert_eq!(links, ProjectLinks::default());
    }

    #[test]
    fn filled_links_are_kept_and_trimmed() {
        let links = normalize_links(ProjectLinks {
            github: Some(" https://github.com/me/chat ".to_string()),
            demo: None,
        });
        assert_eq!(links.github.as_deref(), Some("https://github.com/me/chat"));
        assert_eq!(links.demo, None);
    }
}
