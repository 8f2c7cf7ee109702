//! Lookup of named sub-templates for `{{> name}}` tags.

use rustc_hash::FxHashMap;
use stache_ir::TemplateTree;

/// Resolves a partial's name to the tree rendered in its place.
///
/// The returned tree renders against the scope stack current at the partial
/// tag, as if its text had been written there.
pub trait PartialResolver {
    fn resolve(&self, name: &str) -> Option<&TemplateTree>;
}

impl<R: PartialResolver + ?Sized> PartialResolver for &R {
    #[inline]
    fn resolve(&self, name: &str) -> Option<&TemplateTree> {
        (**self).resolve(name)
    }
}

/// In-memory table of parsed partials.
#[derive(Clone, Debug, Default)]
pub struct PartialMap {
    templates: FxHashMap<String, TemplateTree>,
}

impl PartialMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tree` under `name`, returning any tree it replaces.
    pub fn insert(&mut self, name: impl Into<String>, tree: TemplateTree) -> Option<TemplateTree> {
        self.templates.insert(name.into(), tree)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl PartialResolver for PartialMap {
    #[inline]
    fn resolve(&self, name: &str) -> Option<&TemplateTree> {
        self.templates.get(name)
    }
}

impl<N: Into<String>> FromIterator<(N, TemplateTree)> for PartialMap {
    fn from_iter<I: IntoIterator<Item = (N, TemplateTree)>>(iter: I) -> Self {
        PartialMap {
            templates: iter
                .into_iter()
                .map(|(name, tree)| (name.into(), tree))
                .collect(),
        }
    }
}
