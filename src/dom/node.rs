//! Shared node vocabulary
//!
//! Uses NodeId (u32) for compact, arena-index node references.

use indexmap::IndexMap;

/// Compact node identifier (index into the pool's arena)
pub type NodeId = u32;

/// Attribute map that iterates in insertion (document) order
pub type Attributes = IndexMap<String, String>;

/// Parent/child bookkeeping every pooled node carries
pub trait TreeNode {
    fn parent(&self) -> Option<NodeId>;
    fn set_parent(&mut self, parent: Option<NodeId>);
    fn children(&self) -> &[NodeId];
    fn children_mut(&mut self) -> &mut Vec<NodeId>;
    /// Monotonic creation index, used to order roots
    fn sequence_index(&self) -> u32;
}

/// Build an attribute map from name/value pairs, keeping first-seen order
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
