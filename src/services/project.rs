//! Project CRUD pass-through for the dashboard's projects section.
//!
//! DESIGN
//! ======
//! The data API owns storage and row-level security; this module mirrors
//! the dashboard's contract with it. Every mutation reports a toast-style
//! notice, and fetch failures degrade to an empty list so the dashboard
//! renders an empty state instead of crashing.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::backend::{self, ApiClient, PREFER_REPRESENTATION};
use crate::notify::{Notice, NotificationSink};

const TABLE: &str = "projects";

/// A dashboard project row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub progress: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub user_id: Uuid,
}

impl Project {
    /// Progress is a percentage; rows written before the form enforced the
    /// range are clamped on the way in.
    #[must_use]
    fn normalized(mut self) -> Self {
        self.progress = self.progress.clamp(0, 100);
        self
    }
}

/// Fields the create form collects. `user_id` and timestamps are assigned
/// by the platform.
#[derive(Clone, Debug, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub progress: i32,
}

/// Partial update; absent fields are left untouched by the data API.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
}

#[derive(Serialize)]
struct PatchBody {
    #[serde(flatten)]
    patch: ProjectPatch,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

/// Query pairs for the dashboard listing: all columns, most recently
/// updated first.
#[must_use]
pub fn list_query() -> [(&'static str, &'static str); 2] {
    [("select", "*"), ("order", "updated_at.desc")]
}

fn id_filter(id: Uuid) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

/// Fetch the caller's projects. Failures surface as a notice and an empty
/// list, matching the dashboard's empty-state rendering.
pub async fn list_projects(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    access_token: Option<&str>,
) -> Vec<Project> {
    let result = backend::send_json::<Vec<Project>>(
        api.request(Method::GET, &api.rest_url(TABLE), access_token)
            .query(&list_query()),
    )
    .await;

    match result {
        Ok(rows) => rows.into_iter().map(Project::normalized).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "project list fetch failed");
            sink.report(Notice::failure("Error fetching projects", err.to_string()));
            Vec::new()
        }
    }
}

/// Create a project and return the stored row.
pub async fn create_project(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    access_token: Option<&str>,
    project: NewProject,
) -> Option<Project> {
    let result = backend::send_json::<Vec<Project>>(
        api.request(Method::POST, &api.rest_url(TABLE), access_token)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&project),
    )
    .await;

    match result {
        Ok(rows) if !rows.is_empty() => {
            sink.report(Notice::success(
                "Project created",
                "Your new project has been created successfully",
            ));
            rows.into_iter().next().map(Project::normalized)
        }
        Ok(_) => {
            sink.report(Notice::failure("Error creating project", "no row returned"));
            None
        }
        Err(err) => {
            sink.report(Notice::failure("Error creating project", err.to_string()));
            None
        }
    }
}

/// Apply a partial update, stamping `updated_at` so the listing order moves
/// the row to the top.
pub async fn update_project(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    access_token: Option<&str>,
    id: Uuid,
    patch: ProjectPatch,
) -> Option<Project> {
    let body = PatchBody { patch, updated_at: OffsetDateTime::now_utc() };
    let result = backend::send_json::<Vec<Project>>(
        api.request(Method::PATCH, &api.rest_url(TABLE), access_token)
            .query(&id_filter(id))
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&body),
    )
    .await;

    match result {
        Ok(rows) if !rows.is_empty() => {
            sink.report(Notice::success(
                "Project updated",
                "Your project has been updated successfully",
            ));
            rows.into_iter().next().map(Project::normalized)
        }
        Ok(_) => {
            sink.report(Notice::failure("Error updating project", "no matching row"));
            None
        }
        Err(err) => {
            sink.report(Notice::failure("Error updating project", err.to_string()));
            None
        }
    }
}

/// Delete a project. Returns whether the request succeeded.
pub async fn delete_project(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    access_token: Option<&str>,
    id: Uuid,
) -> bool {
    let result = backend::send_no_content(
        api.request(Method::DELETE, &api.rest_url(TABLE), access_token)
            .query(&id_filter(id)),
    )
    .await;

    match result {
        Ok(()) => {
            sink.report(Notice::success(
                "Project deleted",
                "Your project has been deleted successfully",
            ));
            true
        }
        Err(err) => {
            sink.report(Notice::failure("Error deleting project", err.to_string()));
            false
        }
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
