//! Target identity for published images
//!
//! Derives the registry namespace (`owner/name`) from repository metadata and
//! composes per-service image references from it.

use thiserror::Error;

use crate::constants::{registry, tag};

#[cfg(test)]
mod tests;

/// Errors raised while deriving a target identity.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TargetError {
    #[error("Repository owner is empty")]
    EmptyOwner,

    #[error("Repository '{0}' is not in owner/name form")]
    MalformedRepository(String),

    #[error("Repository '{0}' has an empty name")]
    EmptyName(String),
}

/// Where images for the published services live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTarget {
    registry: String,
    owner: String,
    name: String,
    tag: String,
}

impl ImageTarget {
    /// Build a target from the repository owner and the `owner/name` identity.
    ///
    /// Both segments are lower-cased, since registries reject upper-case
    /// repository paths. Only the segment right after the first `/` is used
    /// as the name.
    pub fn from_repository(owner: &str, repository: &str) -> Result<Self, TargetError> {
        if owner.is_empty() {
            return Err(TargetError::EmptyOwner);
        }

        let name = repository
            .split('/')
            .nth(1)
            .ok_or_else(|| TargetError::MalformedRepository(repository.to_string()))?;
        if name.is_empty() {
            return Err(TargetError::EmptyName(repository.to_string()));
        }

        Ok(Self {
            registry: registry::GHCR.to_string(),
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
            tag: tag::DEFAULT.to_string(),
        })
    }

    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image reference for a service, e.g. `ghcr.io/myorg/myrepo/server:latest`
    pub fn image_for(&self, service: &str) -> String {
        format!(
            "{}/{}/{}/{}:{}",
            self.registry, self.owner, self.name, service, self.tag
        )
    }
}
