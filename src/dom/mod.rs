//! DOM Module - Arena-based node pools
//!
//! One pool per input format, each holding:
//! - Arena allocation for nodes
//! - NodeId (u32) indices; ids are never reused within a pool
//! - Ordered child-id lists (document order) and parent back-links
//! - Root ids ordered by creation sequence
//!
//! Pools are filled by an external parser and live for one conversion.

pub mod arena;
pub mod html;
pub mod json;
pub mod node;
pub mod xml;

pub use html::{HtmlNode, HtmlNodePool};
pub use json::{JsonNode, JsonNodeKind, JsonNodePool, JsonValueType};
pub use node::{attributes, Attributes, NodeId, TreeNode};
pub use xml::{XmlNode, XmlNodeKind, XmlNodePool};

/// Trait for pool access - lets converters and tooling walk any format
pub trait NodePool {
    type Node;

    /// Get a node by ID
    fn get_node(&self, id: NodeId) -> Option<&Self::Node>;

    /// Root node IDs in document order
    fn root_ids(&self) -> Vec<NodeId>;

    /// Ordered child IDs of a node
    fn children_of(&self, id: NodeId) -> &[NodeId];

    /// Total number of nodes
    fn node_count(&self) -> usize;

    /// One-line human description of a node
    fn describe(&self, id: NodeId) -> String;

    /// Indented listing of every tree in the pool
    fn debug_tree(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeId, usize)> = self
            .root_ids()
            .into_iter()
            .rev()
            .map(|id| (id, 0))
            .collect();
        while let Some((id, level)) = stack.pop() {
            out.push_str(&"  ".repeat(level));
            out.push_str(&format!("[{}] {}\n", id, self.describe(id)));
            for child in self.children_of(id).iter().rev() {
                stack.push((*child, level + 1));
            }
        }
        out
    }
}
