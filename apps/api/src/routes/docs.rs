use axum::Json;
use serde::Serialize;

/// One entry in the endpoint catalog served to the API explorer.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Served by the API itself so the explorer's documentation cannot drift
/// from the router.
pub const CATALOG: &[EndpointDoc] = &[
    EndpointDoc {
        method: "GET",
        path: "/health",
        description: "Check if the API server is running",
    },
    EndpointDoc {
        method: "GET",
        path: "/api/projects",
        description: "Fetch all projects; `q` filters title/description, `skills` filters tags",
    },
    EndpointDoc {
        method: "GET",
        path: "/api/projects/:id",
        description: "Fetch a single project by ID",
    },
    EndpointDoc {
        method: "POST",
        path: "/api/projects",
        description: "Create a project (title required)",
    },
    EndpointDoc {
        method: "PUT",
        path: "/api/projects/:id",
        description: "Update fields of a project by ID",
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/projects/:id",
        description: "Delete a project by ID",
    },
    EndpointDoc {
        method: "GET",
        path: "/api/skills",
        description: "Fetch the selectable skill tags",
    },
    EndpointDoc {
        method: "GET",
        path: "/api/profile",
        description: "Fetch the profile, or null while none exists",
    },
    EndpointDoc {
        method: "POST",
        path: "/api/profile",
        description: "Create the profile",
    },
    EndpointDoc {
        method: "GET",
        path: "/api/docs",
        description: "This endpoint catalog",
    },
];

/// GET /api/docs
pub async fn docs_handler() -> Json<&'static [EndpointDoc]> {
    Json(CATALOG)
}
