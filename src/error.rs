//! Error types for vista

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Repository '{0}' not found")]
    RepositoryNotFound(String),

    #[error("Resource '{resource}' not found in repository '{repo}'")]
    ResourceNotFound { repo: String, resource: String },

    #[error("Invalid path")]
    InvalidPath,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::RepositoryNotFound(_)
            | Error::ResourceNotFound { .. }
            | Error::InvalidPath => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // The encoder's detail stays in the log, not the response body.
            Error::Serialization(err) => {
                tracing::error!(error = %err, "failed to encode response");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            Error::RepositoryNotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::ResourceNotFound {
                repo: "x".to_string(),
                resource: "y".to_string(),
            }
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(Error::InvalidPath.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        assert_eq!(
            Error::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn messages_name_the_missing_keys() {
        let err = Error::ResourceNotFound {
            repo: "ecr-main".to_string(),
            resource: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resource 'missing' not found in repository 'ecr-main'"
        );

        let err = Error::RepositoryNotFound("unknown".to_string());
        assert_eq!(err.to_string(), "Repository 'unknown' not found");
    }
}
