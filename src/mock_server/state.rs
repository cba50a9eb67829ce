//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Transifex API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{ContentUpdate, Language, Project, Resource, TranslationString};

/// State handle shared between the server and its handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Shared state for the mock server.
///
/// Holds one project and everything inside it. Wrapped in
/// `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// The single project served. Requests for other slugs get 404.
    pub project: Option<Project>,

    /// Project languages.
    pub languages: Vec<Language>,

    /// Resources indexed by slug.
    pub resources: BTreeMap<String, Resource>,

    /// Source content indexed by resource slug.
    pub sources: HashMap<String, String>,

    /// Translated file content indexed by (resource slug, language code).
    pub translations: HashMap<(String, String), String>,

    /// Translation string records indexed by (resource slug, language code).
    pub strings: HashMap<(String, String), Vec<TranslationString>>,

    /// Optional basic-auth credentials. If set, requests must carry them.
    pub required_credentials: Option<(String, String)>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Set the served project.
    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    /// Add a project language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }

    /// Add a resource, optionally with its source content.
    pub fn with_resource(mut self, resource: Resource, source: Option<&str>) -> Self {
        if let Some(source) = source {
            self.sources
                .insert(resource.slug.clone(), source.to_string());
        }
        self.resources.insert(resource.slug.clone(), resource);
        self
    }

    /// Add a translation and its string records for a resource.
    pub fn with_translation(
        mut self,
        slug: &str,
        lang_code: &str,
        content: &str,
        strings: Vec<TranslationString>,
    ) -> Self {
        let key = (slug.to_string(), lang_code.to_string());
        self.translations.insert(key.clone(), content.to_string());
        self.strings.insert(key, strings);
        self
    }

    /// Require basic-auth credentials on every request.
    pub fn with_required_credentials(mut self, user: &str, password: &str) -> Self {
        self.required_credentials = Some((user.to_string(), password.to_string()));
        self
    }

    /// Whether `slug` names the served project.
    pub fn is_project(&self, slug: &str) -> bool {
        self.project.as_ref().is_some_and(|p| p.slug == slug)
    }

    /// Get a resource by slug.
    pub fn get_resource(&self, slug: &str) -> Option<&Resource> {
        self.resources.get(slug)
    }

    /// Remove a resource and everything attached to it.
    pub fn delete_resource(&mut self, slug: &str) -> Option<Resource> {
        let removed = self.resources.remove(slug)?;
        self.sources.remove(slug);
        self.translations.retain(|(s, _), _| s != slug);
        self.strings.retain(|(s, _), _| s != slug);
        Some(removed)
    }

    /// Get a translation, honouring the `sourceastranslation` mode.
    pub fn get_translation(&self, slug: &str, lang_code: &str, mode: &str) -> Option<&String> {
        let key = (slug.to_string(), lang_code.to_string());
        match self.translations.get(&key) {
            Some(content) => Some(content),
            None if mode == "sourceastranslation" => self.sources.get(slug),
            None => None,
        }
    }

    /// Replace the source content of a resource and report the change.
    ///
    /// Each non-empty line counts as one string.
    pub fn replace_source(&mut self, slug: &str, content: String) -> ContentUpdate {
        let old = self.sources.get(slug).cloned().unwrap_or_default();
        let old_lines: Vec<&str> = old.lines().filter(|l| !l.trim().is_empty()).collect();
        let new_lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

        let added = new_lines.iter().filter(|l| !old_lines.contains(l)).count();
        let deleted = old_lines.iter().filter(|l| !new_lines.contains(l)).count();

        let update = ContentUpdate {
            strings_added: added as u64,
            strings_updated: 0,
            strings_delete: deleted as u64,
            redirect: Some(format!("/resource/{slug}/")),
            extra: Default::default(),
        };
        self.sources.insert(slug.to_string(), content);
        update
    }
}
