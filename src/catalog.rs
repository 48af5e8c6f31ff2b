//! In-memory catalog of repositories and their resources
//!
//! The catalog is built once at startup from a literal fixture and never
//! mutated. Lookups hand out owned clones, so callers must not assume
//! referential stability between calls.

use std::collections::HashMap;

use crate::types::{Repository, Resource};

/// Read-only lookup table over repositories and the resources they contain.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    repositories: HashMap<String, Repository>,
    /// Resources keyed by repository id, then resource id.
    resources: HashMap<String, HashMap<String, Resource>>,
}

impl Catalog {
    pub fn new(
        repositories: HashMap<String, Repository>,
        resources: HashMap<String, HashMap<String, Resource>>,
    ) -> Self {
        Self {
            repositories,
            resources,
        }
    }

    /// Build the catalog from the hardcoded fixture.
    pub fn with_mock_data() -> Self {
        Self::new(mock_repositories(), mock_resources())
    }

    /// All repositories, in no particular order.
    pub fn list_repositories(&self) -> Vec<Repository> {
        self.repositories.values().cloned().collect()
    }

    pub fn get_repository(&self, id: &str) -> Option<Repository> {
        self.repositories.get(id).cloned()
    }

    /// All resources for a repository. Returns an empty vec, not an error,
    /// when the repository id is unknown.
    pub fn list_resources(&self, repo_id: &str) -> Vec<Resource> {
        self.resources
            .get(repo_id)
            .map(|resources| resources.values().cloned().collect())
            .unwrap_or_default()
    }

    /// A single resource, or `None` if either key is unknown.
    pub fn get_resource(&self, repo_id: &str, resource_id: &str) -> Option<Resource> {
        self.resources.get(repo_id)?.get(resource_id).cloned()
    }
}

fn mock_repositories() -> HashMap<String, Repository> {
    HashMap::from([
        (
            "ecr-main".to_string(),
            Repository {
                id: "ecr-main".to_string(),
                name: "ECR Main".to_string(),
                kind: "ecr".to_string(),
                url: "123456789012.dkr.ecr.us-west-2.amazonaws.com".to_string(),
                description: "Main ECR repository".to_string(),
            },
        ),
        (
            "dockerhub".to_string(),
            Repository {
                id: "dockerhub".to_string(),
                name: "Docker Hub".to_string(),
                kind: "dockerhub".to_string(),
                url: "https://hub.docker.com".to_string(),
                description: "Docker Hub registry".to_string(),
            },
        ),
    ])
}

fn mock_resources() -> HashMap<String, HashMap<String, Resource>> {
    HashMap::from([
        (
            "ecr-main".to_string(),
            HashMap::from([
                (
                    "my-app".to_string(),
                    Resource {
                        id: "my-app".to_string(),
                        name: "my-app".to_string(),
                        kind: "container-image".to_string(),
                        repository: "123456789012.dkr.ecr.us-west-2.amazonaws.com/my-app"
                            .to_string(),
                        tags: vec!["latest".to_string(), "v1.2.3".to_string()],
                        created: "2025-05-30T12:34:56Z".to_string(),
                        size: "128MB".to_string(),
                        digest: "sha256:abc123...".to_string(),
                        owner: "my-team@example.com".to_string(),
                    },
                ),
                (
                    "api-service".to_string(),
                    Resource {
                        id: "api-service".to_string(),
                        name: "api-service".to_string(),
                        kind: "container-image".to_string(),
                        repository: "123456789012.dkr.ecr.us-west-2.amazonaws.com/api-service"
                            .to_string(),
                        tags: vec!["latest".to_string(), "v2.0.1".to_string()],
                        created: "2025-05-29T10:12:34Z".to_string(),
                        size: "95MB".to_string(),
                        digest: "sha256:def456...".to_string(),
                        owner: "api-team@example.com".to_string(),
                    },
                ),
            ]),
        ),
        (
            "dockerhub".to_string(),
            HashMap::from([(
                "nginx".to_string(),
                Resource {
                    id: "nginx".to_string(),
                    name: "nginx".to_string(),
                    kind: "container-image".to_string(),
                    repository: "docker.io/library/nginx".to_string(),
                    tags: vec!["latest".to_string(), "1.21.6".to_string()],
                    created: "2025-04-15T08:30:00Z".to_string(),
                    size: "142MB".to_string(),
                    digest: "sha256:ghi789...".to_string(),
                    owner: "nginx-maintainers".to_string(),
                },
            )]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_repositories_returns_all() {
        let catalog = Catalog::with_mock_data();
        let repos = catalog.list_repositories();
        assert_eq!(repos.len(), 2);

        let ids: Vec<&str> = repos.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"ecr-main"));
        assert!(ids.contains(&"dockerhub"));
    }

    #[test]
    fn get_repository_id_matches_input() {
        let catalog = Catalog::with_mock_data();
        for id in ["ecr-main", "dockerhub"] {
            let repo = catalog.get_repository(id).unwrap();
            assert_eq!(repo.id, id);
        }
    }

    #[test]
    fn get_repository_unknown_is_none() {
        let catalog = Catalog::with_mock_data();
        assert!(catalog.get_repository("nonexistent").is_none());
    }

    #[test]
    fn list_resources_for_known_repo() {
        let catalog = Catalog::with_mock_data();
        let resources = catalog.list_resources("ecr-main");
        assert_eq!(resources.len(), 2);
        for resource in &resources {
            assert!(resource
                .repository
                .starts_with("123456789012.dkr.ecr.us-west-2.amazonaws.com"));
        }
    }

    #[test]
    fn list_resources_unknown_repo_is_empty() {
        let catalog = Catalog::with_mock_data();
        assert!(catalog.list_resources("nonexistent").is_empty());
    }

    #[test]
    fn list_resources_known_repo_with_no_resources_is_empty() {
        let repositories = HashMap::from([(
            "empty-repo".to_string(),
            Repository {
                id: "empty-repo".to_string(),
                name: "Empty".to_string(),
                kind: "ecr".to_string(),
                url: "example.com".to_string(),
                description: String::new(),
            },
        )]);
        let catalog = Catalog::new(repositories, HashMap::new());

        assert!(catalog.get_repository("empty-repo").is_some());
        assert!(catalog.list_resources("empty-repo").is_empty());
    }

    #[test]
    fn get_resource_known_pair() {
        let catalog = Catalog::with_mock_data();
        let resource = catalog.get_resource("ecr-main", "my-app").unwrap();
        assert_eq!(resource.id, "my-app");
        assert_eq!(resource.tags, vec!["latest", "v1.2.3"]);
    }

    #[test]
    fn get_resource_unknown_keys_are_none() {
        let catalog = Catalog::with_mock_data();
        assert!(catalog.get_resource("nonexistent", "my-app").is_none());
        assert!(catalog.get_resource("ecr-main", "nonexistent").is_none());
    }

    #[test]
    fn lookups_return_distinct_copies() {
        let catalog = Catalog::with_mock_data();
        let mut first = catalog.get_repository("ecr-main").unwrap();
        first.name = "mutated".to_string();

        let second = catalog.get_repository("ecr-main").unwrap();
        assert_eq!(second.name, "ECR Main");
    }
}
