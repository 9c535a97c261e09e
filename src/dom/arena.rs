//! Node arena
//!
//! Owns every node of one pool. Children are ordered id lists, never
//! owning pointers, so back-links (parent, siblings) carry no lifetimes.

use super::node::{NodeId, TreeNode};
use crate::error::{EmmetError, Result};

#[derive(Debug, Clone)]
pub struct Arena<N> {
    nodes: Vec<N>,
    roots: Vec<NodeId>,
    sequence: u32,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Arena {
            nodes: Vec::with_capacity(64),
            roots: Vec::new(),
            sequence: 0,
        }
    }
}

impl<N: TreeNode> Arena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; `build` receives the new id and sequence index
    pub fn push(&mut self, build: impl FnOnce(NodeId, u32) -> N) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.sequence += 1;
        self.nodes.push(build(id, self.sequence));
        id
    }

    /// Add a node and register it as a root
    pub fn push_root(&mut self, build: impl FnOnce(NodeId, u32) -> N) -> NodeId {
        let id = self.push(build);
        self.roots.push(id);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(id as usize)
    }

    /// Get a node or fail with a structural error
    pub fn require(&self, id: NodeId) -> Result<&N> {
        self.get(id).ok_or_else(|| EmmetError::missing_node(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a top-level node (idempotent)
    ///
    /// A node that already has a parent cannot be a root.
    pub fn mark_root(&mut self, id: NodeId) -> Result<()> {
        if self.require(id)?.parent().is_some() {
            return Err(EmmetError::structural(id, "node with a parent cannot be a root"));
        }
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        Ok(())
    }

    /// Root ids in document order
    pub fn root_ids(&self) -> Vec<NodeId> {
        let mut roots = self.roots.clone();
        roots.sort_by_key(|id| self.get(*id).map(|n| n.sequence_index()).unwrap_or(u32::MAX));
        roots
    }

    /// Append `child` to `parent`'s child list
    ///
    /// Re-adding an existing child is a no-op. A child moved from another
    /// parent is detached from it first, and a root stops being a root.
    /// Returns the previous parent when one was detached.
    ///
    /// Fails when `parent_id` is `child_id` itself or one of its descendants.
    pub fn attach(&mut self, child_id: NodeId, parent_id: NodeId) -> Result<Option<NodeId>> {
        self.require(parent_id)?;
        let previous = self.require(child_id)?.parent();
        if self.is_ancestor_or_self(child_id, parent_id) {
            return Err(EmmetError::structural(
                child_id,
                format!("attaching under node {} would create a cycle", parent_id),
            ));
        }
        self.roots.retain(|root| *root != child_id);

        let mut detached = None;
        if let Some(old) = previous.filter(|old| *old != parent_id) {
            if let Some(old_parent) = self.get_mut(old) {
                old_parent.children_mut().retain(|c| *c != child_id);
            }
            detached = Some(old);
        }

        if let Some(child) = self.get_mut(child_id) {
            child.set_parent(Some(parent_id));
        }
        if let Some(parent) = self.get_mut(parent_id) {
            let children = parent.children_mut();
            if !children.contains(&child_id) {
                children.push(child_id);
            }
        }
        Ok(detached)
    }

    /// Whether `ancestor` is `id` or lies on its parent chain
    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.get(node_id).and_then(|n| n.parent());
        }
        false
    }

    /// Child ids of a node, empty for unknown ids
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Plain {
        parent: Option<NodeId>,
        children: Vec<NodeId>,
        seq: u32,
    }

    impl TreeNode for Plain {
        fn parent(&self) -> Option<NodeId> {
            self.parent
        }
        fn set_parent(&mut self, parent: Option<NodeId>) {
            self.parent = parent;
        }
        fn children(&self) -> &[NodeId] {
            &self.children
        }
        fn children_mut(&mut self) -> &mut Vec<NodeId> {
            &mut self.children
        }
        fn sequence_index(&self) -> u32 {
            self.seq
        }
    }

    fn plain(_: NodeId, seq: u32) -> Plain {
        Plain {
            seq,
            ..Plain::default()
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut arena = Arena::new();
        assert_eq!(arena.push(plain), 0);
        assert_eq!(arena.push(plain), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut arena = Arena::new();
        let p = arena.push(plain);
        let c = arena.push(plain);
        arena.attach(c, p).unwrap();
        arena.attach(c, p).unwrap();
        assert_eq!(arena.children_of(p), &[c]);
        assert_eq!(arena.get(c).unwrap().parent, Some(p));
    }

    #[test]
    fn test_attach_moves_between_parents() {
        let mut arena = Arena::new();
        let a = arena.push(plain);
        let b = arena.push(plain);
        let c = arena.push(plain);
        arena.attach(c, a).unwrap();
        assert_eq!(arena.attach(c, b).unwrap(), Some(a));
        assert!(arena.children_of(a).is_empty());
        assert_eq!(arena.children_of(b), &[c]);
    }

    #[test]
    fn test_attach_unknown_ids() {
        let mut arena: Arena<Plain> = Arena::new();
        let a = arena.push(plain);
        assert!(arena.attach(9, a).is_err());
        assert!(arena.attach(a, 9).is_err());
        assert!(arena.attach(a, a).is_err());
    }

    #[test]
    fn test_roots_in_document_order() {
        let mut arena = Arena::new();
        let first = arena.push(plain);
        let second = arena.push(plain);
        arena.mark_root(second).unwrap();
        arena.mark_root(first).unwrap();
        arena.mark_root(first).unwrap();
        assert_eq!(arena.root_ids(), vec![first, second]);
    }

    #[test]
    fn test_attached_root_leaves_roots() {
        let mut arena = Arena::new();
        let section = arena.push_root(plain);
        let article = arena.push_root(plain);
        assert_eq!(arena.root_ids(), vec![section, article]);

        arena.attach(article, section).unwrap();
        assert_eq!(arena.root_ids(), vec![section]);
        assert_eq!(arena.get(article).unwrap().parent, Some(section));
        assert!(arena.mark_root(article).is_err());
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let mut arena = Arena::new();
        let a = arena.push_root(plain);
        let b = arena.push(plain);
        let c = arena.push(plain);
        arena.attach(b, a).unwrap();
        arena.attach(c, b).unwrap();

        assert!(matches!(
            arena.attach(a, c),
            Err(EmmetError::Structural { node, .. }) if node == a
        ));
        assert!(arena.attach(b, c).is_err());
        assert_eq!(arena.get(a).unwrap().parent, None);
        assert_eq!(arena.children_of(c), &[] as &[NodeId]);
        assert_eq!(arena.root_ids(), vec![a]);
    }
}
