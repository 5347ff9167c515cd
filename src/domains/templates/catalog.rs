//! Template catalog.
//!
//! The catalog is built once at startup and shared read-only between request
//! handlers. Lookups never fail: an unknown id resolves to the fallback
//! template, which the constructor guarantees is present.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::definitions::{GENERIC_APPEAL, builtin_templates};
use super::error::CatalogError;

/// A letter template with its supporting citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Letter text, with `{{PLACEHOLDER}}` tokens left unfilled.
    pub template_body: String,

    /// Ordered list of policy citations backing the letter.
    pub citations: Vec<String>,
}

impl Template {
    /// Create a new template.
    pub fn new<I, S>(template_body: impl Into<String>, citations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template_body: template_body.into(),
            citations: citations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable mapping of template ids to templates, with a fallback.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<String, Template>,
    fallback_id: String,
}

impl TemplateCatalog {
    /// Build a catalog from `(id, template)` pairs.
    ///
    /// Fails if `fallback_id` is not one of the ids.
    pub fn new<I, K>(templates: I, fallback_id: impl Into<String>) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, Template)>,
        K: Into<String>,
    {
        let templates: HashMap<String, Template> = templates
            .into_iter()
            .map(|(id, template)| (id.into(), template))
            .collect();
        let fallback_id = fallback_id.into();

        if !templates.contains_key(&fallback_id) {
            return Err(CatalogError::missing_fallback(fallback_id));
        }

        Ok(Self {
            templates,
            fallback_id,
        })
    }

    /// The catalog shipped with the backend: `GENERIC_APPEAL` and
    /// `TIMELY_FILING`, falling back to `GENERIC_APPEAL`.
    pub fn builtin() -> Self {
        let templates: HashMap<String, Template> = builtin_templates()
            .into_iter()
            .map(|(id, template)| (id.to_string(), template))
            .collect();
        Self {
            templates,
            fallback_id: GENERIC_APPEAL.to_string(),
        }
    }

    /// Resolve an id to a template. Unknown ids get the fallback.
    pub fn resolve(&self, id: &str) -> &Template {
        self.get(id).unwrap_or_else(|| self.fallback())
    }

    /// Exact lookup without fallback.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// The fallback template.
    pub fn fallback(&self) -> &Template {
        // Presence is checked in `new`; `builtin` ships the fallback id.
        &self.templates[&self.fallback_id]
    }

    /// Id of the fallback template.
    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }

    /// All template ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty. Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
