use tracing::info;

use crate::error::{Error, Result};
use crate::repository::{KeyValueStore, REQUIREMENTS_KEY};
use crate::service::{load_or_default, persist};

/// Ordered requirement list, written through to the store on every change.
/// Duplicates are kept.
pub struct RequirementService<R: KeyValueStore> {
    repo: R,
    requirements: Vec<String>,
}

impl<R: KeyValueStore> RequirementService<R> {
    pub fn load(repo: R) -> Result<Self> {
        let requirements: Vec<String> = load_or_default(&repo, REQUIREMENTS_KEY)?;
        info!(count = requirements.len(), "loaded requirements");
        Ok(Self { repo, requirements })
    }

    /// Appends the trimmed text.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyRequirement);
        }
        info!(requirement = text, "adding requirement");
        self.requirements.push(text.to_string());
        persist(&self.repo, REQUIREMENTS_KEY, &self.requirements)
    }

    /// Removes and returns the requirement at `index`, shifting the rest left.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.requirements.len() {
            return Err(Error::RequirementIndex {
                index,
                len: self.requirements.len(),
            });
        }
        let removed = self.requirements.remove(index);
        info!(requirement = %removed, index, "removed requirement");
        persist(&self.repo, REQUIREMENTS_KEY, &self.requirements)?;
        Ok(removed)
    }

    pub fn list(&self) -> &[String] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
