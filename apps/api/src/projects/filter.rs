use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Optional list-query parameters: free text `q` over title/description,
/// and `skills` matched against entries of the tag list.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListFilter {
    pub q: Option<String>,
    pub skills: Option<String>,
}

impl ListFilter {
    /// Free-text term, with whitespace-only input treated as absent.
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Tag term, with whitespace-only input treated as absent.
    pub fn tag(&self) -> Option<&str> {
        self.skills
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Builds the projects list query. Both conditions apply when both params
/// are present; with neither, every document matches. No sort is applied,
/// so results come back in store-native order.
pub fn list_query(filter: &ListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT * FROM projects");
    let mut clause = " WHERE ";

    if let Some(term) = filter.text() {
        let pattern = like_pattern(term);
        query.push(clause);
        clause = " AND ";
        query.push("(title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    if let Some(term) = filter.tag() {
        query.push(clause);
        query.push("EXISTS (SELECT 1 FROM unnest(skills) AS tag WHERE tag ILIKE ");
        query.push_bind(like_pattern(term));
        query.push(")");
    }

    query
}

/// Wraps a term in `%...%` with LIKE metacharacters escaped, so the match
/// is a literal case-insensitive substring rather than a pattern.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(q: Option<&str>, skills: Option<&str>) -> ListFilter {
        ListFilter {
            q: q.map(String::from),
            skills: skills.map(String::from),
        }
    }

    #[test]
    fn unfiltered_query_matches_everything() {
        let query = list_query(&ListFilter::default());
        assert_eq!(query.sql(), "SELECT * FROM projects");
    }

    #[test]
    fn text_filter_matches_title_or_description() {
        let query = list_query(&filter(Some("chat"), None));
        let sql = query.sql();
        assert!(sql.contains("title ILIKE $1"));
        assert!(sql.contains("OR description ILIKE $2"));
    }

    #[test]
    fn tag_filter_probes_the_skills_array() {
        let query = list_query(&filter(None, Some("react")));
        let sql = query.sql();
        assert!(sql.contains("unnest(skills)"));
        assert!(sql.contains("tag ILIKE $1"));
    }

    #[test]
    fn both_filters_apply_together() {
        let query = list_query(&filter(Some("chat"), Some("react")));
        let sql = query.sql();
        assert!(sql.contains(" WHERE "));
        assert!(sql.contains(" AND "));
        assert!(sql.contains("$3"));
    }

    #[test]
    fn no_sort_is_applied() {
        let query = list_query(&filter(Some("chat"), Some("react")));
        assert!(!query.sql().contains("ORDER BY"));
    }

    #[test]
    fn whitespace_only_params_are_treated_as_absent() {
        let query = list_query(&filter(Some("   "), Some("\t")));
        assert_eq!(query.sql(), "SELECT * FROM projects");
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_pattern("50%_done"), "%50\\%\\_done%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn plain_terms_are_only_wrapped() {
        assert_eq!(like_pattern("chat"), "%chat%");
    }
}
