//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{ContentUpdate, Project, Resource};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.slug.len().max(30));

        let mut lines = vec![
            format!("Project: {}", self.slug),
            divider,
            format!("Name:           {}", self.name),
        ];

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        if let Some(ref source) = self.source_language_code {
            lines.push(format!("Source Lang:    {}", source));
        }

        if let Some(ref homepage) = self.homepage {
            lines.push(format!("Homepage:       {}", homepage));
        }

        lines.push(format!(
            "Visibility:     {}",
            if self.private { "private" } else { "public" }
        ));

        lines.join("\n")
    }
}

impl PrettyPrint for Resource {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.slug.len().max(30));

        let mut lines = vec![
            format!("Resource: {}", self.slug),
            divider,
            format!("Name:           {}", self.name),
        ];

        if let Some(ref i18n_type) = self.i18n_type {
            lines.push(format!("Type:           {}", i18n_type));
        }

        if let Some(ref source) = self.source_language_code {
            lines.push(format!("Source Lang:    {}", source));
        }

        if let Some(ref priority) = self.priority {
            lines.push(format!("Priority:       {}", priority));
        }

        if let Some(ref categories) = self.categories {
            if !categories.is_empty() {
                lines.push(format!("Categories:     {}", categories.join(", ")));
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ContentUpdate {
    fn pretty_print(&self) -> String {
        format!(
            "{} added, {} updated, {} deleted",
            self.strings_added, self.strings_updated, self.strings_delete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_pretty_print_format() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "slug": "my-project",
            "name": "My Project",
            "private": true
        }))
        .unwrap();

        let output = project.pretty_print();
        assert!(output.starts_with("Project: my-project"));
        assert!(output.contains("Name:"));
        assert!(output.contains("private"));
    }

    #[test]
    fn test_resource_pretty_print_skips_empty_categories() {
        let resource: Resource = serde_json::from_value(serde_json::json!({
            "slug": "app",
            "name": "App",
            "i18n_type": "PO",
            "categories": []
        }))
        .unwrap();

        let output = resource.pretty_print();
        assert!(output.starts_with("Resource: app"));
        assert!(output.contains("Type:           PO"));
        assert!(!output.contains("Categories"));
    }
}
