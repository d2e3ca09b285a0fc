use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The identifier of a repository.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryId(pub u64);

impl Deref for RepositoryId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository record as returned by the GitHub REST API.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The unique identifier of the repository.
    id: RepositoryId,

    /// The name of the repository.
    name: RepositoryName,

    /// The `owner/name` of the repository.
    full_name: Option<String>,

    /// The web page of the repository.
    html_url: Option<String>,

    /// The description of the repository.
    description: Option<String>,

    /// The number of stars the repository has.
    stargazers_count: Option<u32>,
}

impl Repository {
    /// Creates a new `Repository` instance with only its required fields.
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id: RepositoryId(id),
            name: RepositoryName(name.to_string()),
            full_name: None,
            html_url: None,
            description: None,
            stargazers_count: None,
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the `owner/name` of the repository.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Retrieves the web page of the repository.
    pub fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    /// Retrieves the description of the repository.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the total stars of the repository.
    pub fn stargazers_count(&self) -> Option<u32> {
        self.stargazers_count
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}), Stars: {}",
            self.full_name.as_deref().unwrap_or(&self.name),
            self.id,
            self.stargazers_count.unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_repository_from_github_payload() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "This your first repo!",
            "stargazers_count": 80,
            "fork": false,
            "owner": { "login": "octocat" }
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();

        assert_eq!(RepositoryId(1296269), repository.id());
        assert_eq!("Hello-World", repository.name().as_str());
        assert_eq!(Some("octocat/Hello-World"), repository.full_name());
        assert_eq!(
            Some("https://github.com/octocat/Hello-World"),
            repository.html_url()
        );
        assert_eq!(Some("This your first repo!"), repository.description());
        assert_eq!(Some(80), repository.stargazers_count());
    }

    #[test]
    fn decode_repository_with_only_required_fields() {
        let repository: Repository =
            serde_json::from_str(r#"{"id": 1, "name": "repo-a"}"#).unwrap();

        assert_eq!(Repository::new(1, "repo-a"), repository);
    }

    #[test]
    fn decode_repository_fails_without_name() {
        serde_json::from_str::<Repository>(r#"{"id": 1}"#)
            .expect_err("Expected missing field error");
    }

    #[test]
    fn display_repository() {
        let repository: Repository = serde_json::from_str(
            r#"{"id": 7, "name": "repo-a", "full_name": "octocat/repo-a", "stargazers_count": 3}"#,
        )
        .unwrap();

        assert_eq!(
            "octocat/repo-a (#7), Stars: 3",
            repository.to_string()
        );
        assert_eq!(
            "repo-b (#8), Stars: 0",
            Repository::new(8, "repo-b").to_string()
        );
    }
}
