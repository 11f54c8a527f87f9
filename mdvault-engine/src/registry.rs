//! Transform registry for discovery and selection
//!
//! Transforms are registered under their name and can be run against markdown
//! source in one call: parse, apply, render.

use crate::error::EngineError;
use crate::formats::markdown::{parse_markdown, serialize_to_markdown, FormattingRules};
use crate::transform::Transform;
use crate::transforms::{ArchiveRules, ArchiveTransform, FormatArchiveTransform, FormatTransform};
use std::collections::HashMap;

/// Registry of document transforms
///
/// # Examples
///
/// ```ignore
/// let registry = TransformRegistry::with_defaults();
/// let formatted = registry.run("# Title\nText", "format")?;
/// ```
pub struct TransformRegistry {
    transforms: HashMap<String, Box<dyn Transform>>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformRegistry {
            transforms: HashMap::new(),
        }
    }

    /// Register a transform
    ///
    /// If a transform with the same name already exists, it will be replaced.
    pub fn register<T: Transform + 'static>(&mut self, transform: T) {
        self.transforms
            .insert(transform.name().to_string(), Box::new(transform));
    }

    /// Get a transform by name
    pub fn get(&self, name: &str) -> Result<&dyn Transform, EngineError> {
        self.transforms
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| EngineError::TransformNotFound(name.to_string()))
    }

    /// Check if a transform exists
    pub fn has(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// List all available transform names (sorted)
    pub fn list_transforms(&self) -> Vec<String> {
        let mut names: Vec<_> = self.transforms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse `source`, apply the named transform and render with default rules
    pub fn run(&self, source: &str, name: &str) -> Result<String, EngineError> {
        self.run_with_rules(source, name, &FormattingRules::default())
    }

    /// Parse `source`, apply the named transform and render with `rules`
    pub fn run_with_rules(
        &self,
        source: &str,
        name: &str,
        rules: &FormattingRules,
    ) -> Result<String, EngineError> {
        let transform = self.get(name)?;
        let doc = parse_markdown(source).document;
        Ok(serialize_to_markdown(&transform.apply(&doc), rules))
    }

    /// Create a registry with the built-in transforms, archiving under `rules`
    pub fn with_archive_rules(rules: ArchiveRules) -> Self {
        let mut registry = Self::new();
        registry.register(FormatTransform);
        registry.register(ArchiveTransform::new(rules.clone()));
        registry.register(FormatArchiveTransform::new(rules));
        registry
    }

    /// Create a registry with the built-in transforms
    pub fn with_defaults() -> Self {
        Self::with_archive_rules(ArchiveRules::default())
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
