//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Language, Project, Resource};

use super::state::MockState;

/// Project slug of the default scenario.
pub const DEFAULT_PROJECT: &str = "demo";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a project with required fields only.
    pub fn project(slug: &str, name: &str) -> Project {
        Project {
            slug: slug.to_string(),
            name: name.to_string(),
            description: None,
            source_language_code: Some("en".to_string()),
            homepage: None,
            private: false,
            extra: Default::default(),
        }
    }

    /// Create a language with a single coordinator.
    pub fn language(code: &str, coordinator: &str) -> Language {
        Language {
            language_code: code.to_string(),
            coordinators: vec![coordinator.to_string()],
            reviewers: vec![],
            translators: vec![],
        }
    }

    /// Create a resource.
    pub fn resource(slug: &str, name: &str, i18n_type: &str) -> Resource {
        Resource {
            slug: slug.to_string(),
            name: name.to_string(),
            i18n_type: Some(i18n_type.to_string()),
            source_language_code: Some("en".to_string()),
            categories: None,
            priority: Some("0".to_string()),
            extra: Default::default(),
        }
    }

    /// Create a translation string record.
    pub fn translation_string(key: &str, source: &str, translation: &str) -> serde_json::Value {
        serde_json::json!({
            "key": key,
            "context": "",
            "source_string": source,
            "translation": translation,
            "reviewed": false,
            "pluralized": false,
        })
    }

    /// A project `demo` with French and German, and one PO resource `app`
    /// translated into French.
    pub fn default_scenario() -> MockState {
        let source = "msgid \"hello\"\nmsgstr \"\"\n\nmsgid \"goodbye\"\nmsgstr \"\"\n";
        let french = "msgid \"hello\"\nmsgstr \"bonjour\"\n\nmsgid \"goodbye\"\nmsgstr \"au revoir\"\n";

        let mut project = Self::project(DEFAULT_PROJECT, "Demo Project");
        project.description = Some("Mock project for tests".to_string());

        MockState::new()
            .with_project(project)
            .with_language(Self::language("fr", "alice"))
            .with_language(Self::language("de", "bob"))
            .with_resource(Self::resource("app", "App strings", "PO"), Some(source))
            .with_translation(
                "app",
                "fr",
                french,
                vec![
                    Self::translation_string("hello", "hello", "bonjour"),
                    Self::translation_string("goodbye", "goodbye", "au revoir"),
                ],
            )
    }
}
