//! API handlers

use axum::{
    extract::{Path, State},
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::{Error, Result};

/// Serialize a value by hand so an encoder failure surfaces as a 500 instead
/// of a half-written body.
fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_string(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// List all repositories
pub async fn list_repositories(State(state): State<AppState>) -> Result<Response> {
    let repos = state.catalog.list_repositories();
    tracing::info!(count = repos.len(), "listing repositories");
    json_response(&repos)
}

/// Fetch a single repository by id
pub async fn get_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let repo = state.catalog.get_repository(&id).ok_or_else(|| {
        tracing::info!(%id, "repository not found");
        Error::RepositoryNotFound(id.clone())
    })?;

    tracing::info!(%id, "returning repository");
    json_response(&repo)
}

/// List the resources belonging to a repository
///
/// A known repository with no resources yields an empty array, not a 404;
/// only an unknown repository id is an error.
pub async fn list_resources(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    if state.catalog.get_repository(&id).is_none() {
        tracing::info!(%id, "repository not found");
        return Err(Error::RepositoryNotFound(id));
    }

    let resources = state.catalog.list_resources(&id);
    tracing::info!(%id, count = resources.len(), "returning resources");
    json_response(&resources)
}

/// Fetch a single resource within a repository
pub async fn get_resource(
    State(state): State<AppState>,
    Path((id, resource_id)): Path<(String, String)>,
) -> Result<Response> {
    if state.catalog.get_repository(&id).is_none() {
        tracing::info!(%id, "repository not found");
        return Err(Error::RepositoryNotFound(id));
    }

    let resource = state
        .catalog
        .get_resource(&id, &resource_id)
        .ok_or_else(|| {
            tracing::info!(%id, %resource_id, "resource not found");
            Error::ResourceNotFound {
                repo: id.clone(),
                resource: resource_id.clone(),
            }
        })?;

    tracing::info!(%id, %resource_id, "returning resource");
    json_response(&resource)
}

/// Method fallback for matched routes
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

/// Router fallback for unmatched paths
pub async fn invalid_path(uri: Uri) -> Error {
    tracing::info!(path = %uri.path(), "no route match");
    Error::InvalidPath
}
