//! The platform focus model.
//!
//! The machine never touches real elements. It identifies them by
//! [`ElementId`] and asks a [`Dom`] implementation the few questions it needs:
//! which element is active, whether one element contains another, whether an
//! element still exists. The host also uses it to move focus.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// Opaque identity of an element, assigned by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// Focus and containment queries against the host environment.
pub trait Dom {
    /// The active element of the document that owns `scope`, or of the
    /// default document when `scope` is `None` or unknown.
    fn active_element(&self, scope: Option<ElementId>) -> Option<ElementId>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

    /// Whether `node` is still attached to a document.
    fn is_connected(&self, node: ElementId) -> bool;

    /// Move focus to `node`.
    fn focus(&self, node: ElementId);
}

#[derive(Debug, Default)]
struct Tree {
    next_id: u64,
    parents: HashMap<ElementId, Option<ElementId>>,
    documents: Vec<ElementId>,
    active: HashMap<ElementId, ElementId>,
    focus_log: Vec<ElementId>,
}

impl Tree {
    fn allocate(&mut self, parent: Option<ElementId>) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.parents.insert(id, parent);
        id
    }

    fn document_of(&self, node: ElementId) -> Option<ElementId> {
        let mut current = node;
        loop {
            match self.parents.get(&current)? {
                Some(parent) => current = *parent,
                None => return Some(current),
            }
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents.get(&id).copied().flatten();
        }
        false
    }
}

/// In-memory [`Dom`] for headless hosts and tests.
///
/// Documents are roots; every other element has exactly one parent. Each
/// document tracks its own active element. Focus requests are recorded in
/// order so callers can assert on them.
#[derive(Debug, Default)]
pub struct HeadlessDom {
    tree: RefCell<Tree>,
}

impl HeadlessDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new document root. The first document is the default one.
    pub fn document(&self) -> ElementId {
        let mut tree = self.tree.borrow_mut();
        let id = tree.allocate(None);
        tree.documents.push(id);
        id
    }

    /// Create an element under `parent`.
    ///
    /// An unknown parent yields a detached element.
    pub fn create(&self, parent: ElementId) -> ElementId {
        let mut tree = self.tree.borrow_mut();
        if tree.parents.contains_key(&parent) {
            tree.allocate(Some(parent))
        } else {
            tree.next_id += 1;
            ElementId(tree.next_id)
        }
    }

    /// Detach `node` and its whole subtree.
    pub fn remove(&self, node: ElementId) {
        let mut tree = self.tree.borrow_mut();
        let doomed: Vec<ElementId> = tree
            .parents
            .keys()
            .copied()
            .filter(|id| tree.is_inclusive_ancestor(node, *id))
            .collect();
        for id in &doomed {
            tree.parents.remove(id);
        }
        tree.documents.retain(|doc| !doomed.contains(doc));
        tree.active
            .retain(|doc, active| !doomed.contains(doc) && !doomed.contains(active));
    }

    /// Set the active element without recording a focus request, the way
    /// native tab order or a pointer would.
    pub fn set_active(&self, node: ElementId) {
        let mut tree = self.tree.borrow_mut();
        if let Some(doc) = tree.document_of(node) {
            tree.active.insert(doc, node);
        }
    }

    /// Clear the active element of the document owning `node`.
    pub fn clear_active(&self, node: ElementId) {
        let mut tree = self.tree.borrow_mut();
        if let Some(doc) = tree.document_of(node) {
            tree.active.remove(&doc);
        }
    }

    /// Elements focused through [`Dom::focus`], oldest first.
    pub fn focus_log(&self) -> Vec<ElementId> {
        self.tree.borrow().focus_log.clone()
    }
}

impl Dom for HeadlessDom {
    fn active_element(&self, scope: Option<ElementId>) -> Option<ElementId> {
        let tree = self.tree.borrow();
        let doc = scope
            .and_then(|node| tree.document_of(node))
            .or_else(|| tree.documents.first().copied())?;
        tree.active.get(&doc).copied()
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let tree = self.tree.borrow();
        tree.parents.contains_key(&ancestor) && tree.is_inclusive_ancestor(ancestor, node)
    }

    fn is_connected(&self, node: ElementId) -> bool {
        self.tree.borrow().parents.contains_key(&node)
    }

    fn focus(&self, node: ElementId) {
        let mut tree = self.tree.borrow_mut();
        if let Some(doc) = tree.document_of(node) {
            tree.active.insert(doc, node);
            tree.focus_log.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_and_transitive() {
        let dom = HeadlessDom::new();
        let doc = dom.document();
        let popover = dom.create(doc);
        let list = dom.create(popover);
        let option = dom.create(list);
        let outside = dom.create(doc);

        assert!(dom.contains(popover, popover));
        assert!(dom.contains(popover, option));
        assert!(!dom.contains(popover, outside));
        assert!(!dom.contains(option, list));
    }

    #[test]
    fn focus_updates_owner_document_only() {
        let dom = HeadlessDom::new();
        let main = dom.document();
        let frame = dom.document();
        let button = dom.create(main);
        let field = dom.create(frame);

        dom.focus(field);
        dom.focus(button);

        assert_eq!(dom.active_element(Some(field)), Some(field));
        assert_eq!(dom.active_element(Some(button)), Some(button));
        assert_eq!(dom.active_element(None), Some(button));
        assert_eq!(dom.focus_log(), vec![field, button]);
    }

    #[test]
    fn remove_detaches_subtree_and_active_element() {
        let dom = HeadlessDom::new();
        let doc = dom.document();
        let popover = dom.create(doc);
        let option = dom.create(popover);
        dom.focus(option);

        dom.remove(popover);

        assert!(!dom.is_connected(popover));
        assert!(!dom.is_connected(option));
        assert!(dom.is_connected(doc));
        assert_eq!(dom.active_element(Some(doc)), None);
    }

    #[test]
    fn focusing_detached_element_is_ignored() {
        let dom = HeadlessDom::new();
        let doc = dom.document();
        let gone = dom.create(doc);
        dom.remove(gone);

        dom.focus(gone);

        assert!(dom.focus_log().is_empty());
        assert_eq!(dom.active_element(None), None);
    }

    #[test]
    fn set_active_does_not_log() {
        let dom = HeadlessDom::new();
        let doc = dom.document();
        let input = dom.create(doc);

        dom.set_active(input);

        assert_eq!(dom.active_element(None), Some(input));
        assert!(dom.focus_log().is_empty());

        dom.clear_active(input);
        assert_eq!(dom.active_element(None), None);
    }
}
