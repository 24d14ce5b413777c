//! Immutable table of resolved fonts for one accessibility context

use std::collections::HashMap;

use crate::context::ContentSizeContext;
use crate::font::{FontHandle, FontSpec};

/// Resolved fonts keyed by spec
///
/// Built once per [`ContentSizeContext`] and never mutated afterwards. When the
/// context changes, build a new mapping and replace this one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMapping {
    context: ContentSizeContext,
    entries: HashMap<FontSpec, FontHandle>,
}

impl FontMapping {
    pub(crate) fn new(context: ContentSizeContext) -> Self {
        Self {
            context,
            entries: HashMap::new(),
        }
    }

    /// Last write wins on a repeated key
    pub(crate) fn insert(&mut self, spec: FontSpec, handle: FontHandle) {
        if let Some(previous) = self.entries.insert(spec, handle) {
            tracing::warn!("Duplicate font mapping entry for {:?}, replacing {}", spec, previous);
        }
    }

    /// Handle for `spec`, or `None` if the spec was never declared
    pub fn resolve(&self, spec: &FontSpec) -> Option<&FontHandle> {
        self.entries.get(spec)
    }

    /// Effective point size for `spec`
    pub fn point_size(&self, spec: &FontSpec) -> Option<f32> {
        self.resolve(spec).map(|handle| handle.point_size)
    }

    pub fn contains(&self, spec: &FontSpec) -> bool {
        self.entries.contains_key(spec)
    }

    /// Context this mapping was built for
    pub fn context(&self) -> ContentSizeContext {
        self.context
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FontSpec, &FontHandle)> {
        self.entries.iter()
    }
}

/// Look up `spec` in `mapping`
pub fn resolve<'a>(mapping: &'a FontMapping, spec: &FontSpec) -> Option<&'a FontHandle> {
    mapping.resolve(spec)
}
