//! HTML node pool
//!
//! Elements and text nodes with sibling links recomputed on every attach
//! and a per-parent count of element children (used for grouping).

use super::arena::Arena;
use super::node::{Attributes, NodeId, TreeNode};
use super::NodePool;
use crate::error::Result;

/// Tag used for text nodes
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone)]
pub struct HtmlNode {
    pub id: NodeId,
    /// Lowercased tag name, `#text` for text nodes
    pub tag: String,
    pub attrs: Attributes,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub sequence_index: u32,
    pub text_content: Option<String>,
    pub is_text_node: bool,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub non_text_children_count: usize,
}

impl HtmlNode {
    pub fn has_siblings(&self) -> bool {
        self.prev_sibling.is_some() || self.next_sibling.is_some()
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl TreeNode for HtmlNode {
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
        self.sequence_index
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlNodePool {
    arena: Arena<HtmlNode>,
}

impl HtmlNodePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn element(tag: &str, attrs: Attributes) -> impl FnOnce(NodeId, u32) -> HtmlNode {
        let tag = tag.to_lowercase();
        move |id, sequence_index| HtmlNode {
            id,
            tag,
            attrs,
            parent: None,
            children: Vec::new(),
            sequence_index,
            text_content: None,
            is_text_node: false,
            prev_sibling: None,
            next_sibling: None,
            non_text_children_count: 0,
        }
    }

    /// Create an element node; the tag is lowercased
    pub fn create_element(&mut self, tag: &str, attrs: Attributes) -> NodeId {
        self.arena.push(Self::element(tag, attrs))
    }

    /// Create an element and register it as a root
    pub fn create_root_element(&mut self, tag: &str, attrs: Attributes) -> NodeId {
        self.arena.push_root(Self::element(tag, attrs))
    }

    /// Create a text node; surrounding whitespace is trimmed
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        let text = text.trim().to_string();
        self.arena.push(|id, sequence_index| HtmlNode {
            id,
            tag: TEXT_TAG.to_string(),
            attrs: Attributes::new(),
            parent: None,
            children: Vec::new(),
            sequence_index,
            text_content: Some(text),
            is_text_node: true,
            prev_sibling: None,
            next_sibling: None,
            non_text_children_count: 0,
        })
    }

    pub fn mark_root(&mut self, id: NodeId) -> Result<()> {
        self.arena.mark_root(id)
    }

    /// Append a child and recompute sibling links and element counts
    pub fn update_parent_child(&mut self, child_id: NodeId, parent_id: NodeId) -> Result<()> {
        if let Some(old_parent) = self.arena.attach(child_id, parent_id)? {
            self.relink(old_parent);
        }
        self.relink(parent_id);
        Ok(())
    }

    /// Rebuild prev/next links and the element-child counter of `parent_id`
    fn relink(&mut self, parent_id: NodeId) {
        let children = self.arena.children_of(parent_id).to_vec();
        let mut elements = 0;
        for (index, child_id) in children.iter().enumerate() {
            let prev = index.checked_sub(1).map(|i| children[i]);
            let next = children.get(index + 1).copied();
            if let Some(child) = self.arena.get_mut(*child_id) {
                child.prev_sibling = prev;
                child.next_sibling = next;
                if !child.is_text_node {
                    elements += 1;
                }
            }
        }
        if let Some(parent) = self.arena.get_mut(parent_id) {
            parent.non_text_children_count = elements;
        }
    }

    /// Element siblings of a node, excluding the node itself
    pub fn siblings_count(&self, id: NodeId) -> usize {
        let Some(node) = self.arena.get(id) else {
            return 0;
        };
        let Some(parent) = node.parent.and_then(|p| self.arena.get(p)) else {
            return 0;
        };
        let own = usize::from(!node.is_text_node);
        parent.non_text_children_count.saturating_sub(own)
    }
}

impl NodePool for HtmlNodePool {
    type Node = HtmlNode;

    fn get_node(&self, id: NodeId) -> Option<&HtmlNode> {
        self.arena.get(id)
    }

    fn root_ids(&self) -> Vec<NodeId> {
        self.arena.root_ids()
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.arena.children_of(id)
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn describe(&self, id: NodeId) -> String {
        let Some(node) = self.arena.get(id) else {
            return String::new();
        };
        if node.is_text_node {
            return format!("\"{}\"", node.text_content.as_deref().unwrap_or(""));
        }
        let mut out = node.tag.clone();
        if !node.attrs.is_empty() {
            let attrs: Vec<String> = node
                .attrs
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, v))
                .collect();
            out.push_str(&format!("[{}]", attrs.join(" ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::attributes;

    fn list() -> (HtmlNodePool, NodeId, Vec<NodeId>) {
        let mut pool = HtmlNodePool::new();
        let ul = pool.create_root_element("UL", Attributes::new());
        let text = pool.create_text_node("  items ");
        let a = pool.create_element("li", Attributes::new());
        let b = pool.create_element("li", Attributes::new());
        for child in [text, a, b] {
            pool.update_parent_child(child, ul).unwrap();
        }
        (pool, ul, vec![text, a, b])
    }

    #[test]
    fn test_tag_lowercased_and_text_trimmed() {
        let (pool, ul, kids) = list();
        assert_eq!(pool.get_node(ul).unwrap().tag, "ul");
        assert_eq!(
            pool.get_node(kids[0]).unwrap().text_content.as_deref(),
            Some("items")
        );
    }

    #[test]
    fn test_sibling_links() {
        let (pool, _, kids) = list();
        let first = pool.get_node(kids[0]).unwrap();
        let middle = pool.get_node(kids[1]).unwrap();
        let last = pool.get_node(kids[2]).unwrap();
        assert_eq!(first.prev_sibling, None);
        assert_eq!(first.next_sibling, Some(kids[1]));
        assert_eq!(middle.prev_sibling, Some(kids[0]));
        assert_eq!(middle.next_sibling, Some(kids[2]));
        assert_eq!(last.next_sibling, None);
        assert!(middle.has_siblings());
    }

    #[test]
    fn test_siblings_count_ignores_text() {
        let (pool, ul, kids) = list();
        assert_eq!(pool.get_node(ul).unwrap().non_text_children_count, 2);
        assert_eq!(pool.siblings_count(kids[1]), 1);
        assert_eq!(pool.siblings_count(kids[0]), 2);
        assert_eq!(pool.siblings_count(ul), 0);
    }

    #[test]
    fn test_readding_child_keeps_counts() {
        let (mut pool, ul, kids) = list();
        pool.update_parent_child(kids[1], ul).unwrap();
        assert_eq!(pool.children_of(ul).len(), 3);
        assert_eq!(pool.get_node(ul).unwrap().non_text_children_count, 2);
    }

    #[test]
    fn test_describe_and_tree() {
        let mut pool = HtmlNodePool::new();
        let a = pool.create_root_element("a", attributes([("href", "/x")]));
        let t = pool.create_text_node("Go");
        pool.update_parent_child(t, a).unwrap();
        assert_eq!(pool.describe(a), "a[href=\"/x\"]");
        let tree = pool.debug_tree();
        assert!(tree.contains("[0] a[href=\"/x\"]"));
        assert!(tree.contains("  [1] \"Go\""));
    }

    #[test]
    fn test_reparented_root_renders_once() {
        let mut pool = HtmlNodePool::new();
        let section = pool.create_root_element("section", Attributes::new());
        let article = pool.create_root_element("article", Attributes::new());
        pool.update_parent_child(article, section).unwrap();

        assert_eq!(pool.root_ids(), vec![section]);
        assert_eq!(pool.get_node(article).unwrap().parent, Some(section));
        let out = crate::convert::convert_html(&pool, &crate::config::EmmetConfig::default());
        assert_eq!(out.unwrap().result, "section>article");
    }

    #[test]
    fn test_cycle_rejected_and_links_untouched() {
        let (mut pool, ul, kids) = list();
        assert!(pool.update_parent_child(ul, kids[0]).is_err());
        assert_eq!(pool.get_node(ul).unwrap().parent, None);
        assert_eq!(pool.get_node(ul).unwrap().non_text_children_count, 2);
    }
}
