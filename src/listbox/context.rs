//! The listbox machine's data payload.

use super::options;
use super::types::{OptionDescriptor, Refs, Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Context record carried alongside the state tag.
///
/// `value` is the committed selection; `navigation_value` is the highlighted
/// option and only becomes `value` through an explicit commit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListboxContext<V> {
    pub value: Option<V>,
    pub navigation_value: Option<V>,
    pub typeahead_query: Option<String>,
    pub options: Arc<[OptionDescriptor<V>]>,
    pub refs: Refs,
}

impl<V: Value> ListboxContext<V> {
    pub fn new(value: Option<V>) -> Self {
        Self {
            value,
            navigation_value: None,
            typeahead_query: None,
            options: Arc::from(Vec::new()),
            refs: Refs::default(),
        }
    }

    pub fn with_options(mut self, options: impl Into<Arc<[OptionDescriptor<V>]>>) -> Self {
        self.options = options.into();
        self
    }

    /// The option matching `navigation_value`, if it is still registered.
    pub fn navigation_option(&self) -> Option<&OptionDescriptor<V>> {
        options::find_by_value(&self.options, self.navigation_value.as_ref()?)
    }

    /// The option matching `value`, if it is still registered.
    pub fn selected_option(&self) -> Option<&OptionDescriptor<V>> {
        options::find_by_value(&self.options, self.value.as_ref()?)
    }

    /// Merge externally derived data: options are replaced wholesale, refs
    /// are merged one level deep.
    pub fn apply_patch(&mut self, patch: &ContextPatch<V>) {
        if let Some(options) = &patch.options {
            self.options = Arc::clone(options);
        }
        if let Some(refs) = patch.refs {
            self.refs = self.refs.merged(refs);
        }
    }
}

/// Partial context carried by `GetDerivedData`.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextPatch<V> {
    pub options: Option<Arc<[OptionDescriptor<V>]>>,
    pub refs: Option<Refs>,
}

impl<V> ContextPatch<V> {
    pub fn new() -> Self {
        Self {
            options: None,
            refs: None,
        }
    }

    pub fn with_options(mut self, options: impl Into<Arc<[OptionDescriptor<V>]>>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn with_refs(mut self, refs: Refs) -> Self {
        self.refs = Some(refs);
        self
    }
}

impl<V> Default for ContextPatch<V> {
    fn default() -> Self {
        Self::new()
    }
}
